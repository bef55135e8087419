//! Boundary validation for rating data.
//!
//! Nothing enters the correction pipeline without passing through here.
//! Validation stops at the first problem it finds and reports it with the
//! category and item identifiers plus the offending value.

use crate::core::{CategoryRatings, ItemRating, RatingSet, ValidationError, SCALE_MAX, SCALE_MIN};
use serde_json::Value;

/// Validate a JSON-shaped document of the form
/// `{"category": {"item": rating, ...}, ...}`.
///
/// Category and item order follow the document order.
pub fn validate_value(value: &Value) -> Result<RatingSet, ValidationError> {
    let object = value.as_object().ok_or(ValidationError::NotAnObject)?;
    if object.is_empty() {
        return Err(ValidationError::EmptyRatingSet);
    }

    let categories = object
        .iter()
        .map(|(category, responses)| parse_category(category, responses))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RatingSet::from_validated(categories))
}

/// Validate already-typed category data.
pub fn validate_categories(categories: Vec<CategoryRatings>) -> Result<RatingSet, ValidationError> {
    if categories.is_empty() {
        return Err(ValidationError::EmptyRatingSet);
    }

    for category in &categories {
        if category.ratings.is_empty() {
            return Err(ValidationError::EmptyCategory {
                category: category.id.clone(),
            });
        }
        for rating in &category.ratings {
            check_rating(&category.id, &rating.item, rating.value)?;
        }
    }

    Ok(RatingSet::from_validated(categories))
}

fn parse_category(category: &str, responses: &Value) -> Result<CategoryRatings, ValidationError> {
    let items = responses
        .as_object()
        .ok_or_else(|| ValidationError::InvalidCategory {
            category: category.to_string(),
        })?;

    if items.is_empty() {
        return Err(ValidationError::EmptyCategory {
            category: category.to_string(),
        });
    }

    let ratings = items
        .iter()
        .map(|(item, raw)| {
            let value = raw.as_f64().ok_or_else(|| ValidationError::NonNumeric {
                category: category.to_string(),
                item: item.clone(),
                value: raw.to_string(),
            })?;
            check_rating(category, item, value)?;
            Ok(ItemRating::new(item.clone(), value))
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(CategoryRatings::new(category, ratings))
}

fn check_rating(category: &str, item: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonNumeric {
            category: category.to_string(),
            item: item.to_string(),
            value: value.to_string(),
        });
    }
    if !(SCALE_MIN..=SCALE_MAX).contains(&value) {
        return Err(ValidationError::OutOfRange {
            category: category.to_string(),
            item: item.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_accepts_well_formed_document() {
        let set = validate_value(&json!({
            "leadership": {"q1": 5, "q2": 4},
            "teamwork": {"q1": 3}
        }))
        .unwrap();

        let ids: Vec<_> = set.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["leadership", "teamwork"]);
        assert_eq!(set.item_count(), 3);
    }

    #[test]
    fn test_preserves_document_order() {
        let set = validate_value(&json!({"zeta": {"q1": 3}, "alpha": {"q1": 4}})).unwrap();
        assert_eq!(set.categories()[0].id, "zeta");
        assert_eq!(set.categories()[1].id, "alpha");
    }

    #[test]
    fn test_rejects_non_object_root() {
        assert_eq!(validate_value(&json!([1, 2, 3])), Err(ValidationError::NotAnObject));
    }

    #[test]
    fn test_rejects_empty_set() {
        assert_eq!(validate_value(&json!({})), Err(ValidationError::EmptyRatingSet));
    }

    #[test]
    fn test_rejects_empty_category() {
        assert_eq!(
            validate_value(&json!({"a": {"q1": 3}, "b": {}})),
            Err(ValidationError::EmptyCategory {
                category: "b".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_category_that_is_not_an_object() {
        assert_eq!(
            validate_value(&json!({"a": [3, 4]})),
            Err(ValidationError::InvalidCategory {
                category: "a".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_non_numeric_rating() {
        assert_eq!(
            validate_value(&json!({"a": {"q1": "high"}})),
            Err(ValidationError::NonNumeric {
                category: "a".to_string(),
                item: "q1".to_string(),
                value: "\"high\"".to_string(),
            })
        );
        assert!(matches!(
            validate_value(&json!({"a": {"q1": true}})),
            Err(ValidationError::NonNumeric { .. })
        ));
        assert!(matches!(
            validate_value(&json!({"a": {"q1": null}})),
            Err(ValidationError::NonNumeric { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_ratings() {
        for bad in [0, 6, -1] {
            let result = validate_value(&json!({"a": {"q1": 3, "q2": bad}}));
            assert_eq!(
                result,
                Err(ValidationError::OutOfRange {
                    category: "a".to_string(),
                    item: "q2".to_string(),
                    value: f64::from(bad),
                })
            );
        }
    }

    #[test]
    fn test_accepts_scale_endpoints_and_fractional_values() {
        let set = validate_value(&json!({"a": {"q1": 1, "q2": 5, "q3": 3.5}})).unwrap();
        assert_eq!(set.values().collect::<Vec<_>>(), vec![1.0, 5.0, 3.5]);
    }

    #[test]
    fn test_typed_validation_rejects_nan() {
        let result = validate_categories(vec![CategoryRatings::from_pairs(
            "a",
            [("q1", f64::NAN)],
        )]);
        assert!(matches!(result, Err(ValidationError::NonNumeric { .. })));
    }

    #[test]
    fn test_typed_validation_rejects_empty_inputs() {
        assert_eq!(validate_categories(vec![]), Err(ValidationError::EmptyRatingSet));
        assert_eq!(
            validate_categories(vec![CategoryRatings::new("a", vec![])]),
            Err(ValidationError::EmptyCategory {
                category: "a".to_string()
            })
        );
    }
}
