//! Review form validation rules (rule table shared with the UI layer).

use url::Url;
use webcore::rules::{FieldErrors, FieldRule, FieldValue, validate_all};

use super::model::ReviewDraft;

pub const NAME: FieldRule = FieldRule {
    required: true,
    required_message: "Name is required",
    min_len: Some((2, "Name must be at least 2 characters")),
    max_len: Some((50, "Name must be less than 50 characters")),
    ..FieldRule::optional("name")
};

pub const PROFESSION: FieldRule = FieldRule {
    max_len: Some((50, "Profession must be less than 50 characters")),
    ..FieldRule::optional("profession")
};

pub const FEEDBACK: FieldRule = FieldRule {
    required: true,
    required_message: "Feedback is required",
    min_len: Some((10, "Feedback must be at least 10 characters")),
    max_len: Some((500, "Feedback must be less than 500 characters")),
    ..FieldRule::optional("feedback")
};

pub const RATING: FieldRule = FieldRule {
    required: true,
    required_message: "Rating is required",
    min: Some((1, "Rating must be at least 1")),
    max: Some((5, "Rating must be at most 5")),
    ..FieldRule::optional("rating")
};

pub const IMAGE: FieldRule = FieldRule {
    shape: Some((is_image_reference, "Please provide a valid image URL")),
    ..FieldRule::optional("image")
};

/// Accepts a well-formed URL, an inline `data:` URL, or an avatar-service
/// URL. Absent images fall back to a generated avatar instead.
fn is_image_reference(value: &str) -> bool {
    value.starts_with("data:")
        || value.contains("ui-avatars.com")
        || Url::parse(value).is_ok()
}

/// Validate a raw review payload. An empty map means the payload is valid.
pub fn validate_review(draft: &ReviewDraft) -> FieldErrors {
    validate_all([
        (&NAME, FieldValue::Text(draft.name.as_deref())),
        (&PROFESSION, FieldValue::Text(draft.profession.as_deref())),
        (&FEEDBACK, FieldValue::Text(draft.feedback.as_deref())),
        (&RATING, FieldValue::Integer(draft.rating)),
        (&IMAGE, FieldValue::Text(draft.image.as_deref())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ReviewDraft {
        ReviewDraft {
            image: None,
            name: Some("Jane".to_owned()),
            profession: Some("Engineer".to_owned()),
            feedback: Some("Professional and fast delivery.".to_owned()),
            rating: Some(5),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_review(&valid_draft()).is_empty());
    }

    #[test]
    fn rating_bounds() {
        for (rating, expected) in [
            (0, Some("Rating must be at least 1")),
            (6, Some("Rating must be at most 5")),
            (1, None),
            (5, None),
        ] {
            let mut draft = valid_draft();
            draft.rating = Some(rating);
            let errors = validate_review(&draft);
            assert_eq!(errors.get("rating").map(String::as_str), expected);
        }
    }

    #[test]
    fn missing_required_fields() {
        let errors = validate_review(&ReviewDraft::default());
        assert_eq!(errors["name"], "Name is required");
        assert_eq!(errors["feedback"], "Feedback is required");
        assert_eq!(errors["rating"], "Rating is required");
        assert!(!errors.contains_key("profession"));
        assert!(!errors.contains_key("image"));
    }

    #[test]
    fn name_and_feedback_length_bounds() {
        let mut draft = valid_draft();
        draft.name = Some("J".to_owned());
        assert_eq!(
            validate_review(&draft)["name"],
            "Name must be at least 2 characters"
        );

        let mut draft = valid_draft();
        draft.name = Some("x".repeat(51));
        assert_eq!(
            validate_review(&draft)["name"],
            "Name must be less than 50 characters"
        );

        let mut draft = valid_draft();
        draft.feedback = Some("too short".to_owned());
        assert_eq!(
            validate_review(&draft)["feedback"],
            "Feedback must be at least 10 characters"
        );

        let mut draft = valid_draft();
        draft.feedback = Some("x".repeat(501));
        assert_eq!(
            validate_review(&draft)["feedback"],
            "Feedback must be less than 500 characters"
        );
    }

    #[test]
    fn image_shapes() {
        for ok in [
            "https://example.com/avatar.png",
            "data:image/png;base64,iVBORw0KGgo=",
            "https://ui-avatars.com/api/?name=Jane",
        ] {
            let mut draft = valid_draft();
            draft.image = Some(ok.to_owned());
            assert!(validate_review(&draft).is_empty(), "rejected {ok}");
        }

        let mut draft = valid_draft();
        draft.image = Some("not a url".to_owned());
        assert_eq!(
            validate_review(&draft)["image"],
            "Please provide a valid image URL"
        );
    }
}
