use miette::Diagnostic;
use modelts_ir::{ClassName, MemberKind};
use thiserror::Error;

/// Result type for model inspection and type resolution.
pub type Result<T> = std::result::Result<T, InspectError>;

/// Fatal errors raised while inspecting a model.
///
/// Unknown type names are never reported here; they degrade to `any`.
#[derive(Debug, Error, Diagnostic)]
pub enum InspectError {
    #[error("no model is targeted for inspection")]
    #[diagnostic(
        code(modelts::no_model_targeted),
        help("designate a model with `inspection_for` before inspecting")
    )]
    NoModelTargeted,

    #[error("'{class}' is not a valid model")]
    #[diagnostic(
        code(modelts::invalid_model),
        help("models must extend Illuminate\\Database\\Eloquent\\Model")
    )]
    InvalidModel { class: ClassName },

    #[error("failed to read the columns of '{model}': {reason}")]
    #[diagnostic(code(modelts::schema_introspection))]
    SchemaIntrospection { model: ClassName, reason: String },

    #[error("failed to reflect '{model}::{member}': {reason}")]
    #[diagnostic(code(modelts::reflection))]
    Reflection {
        model: ClassName,
        member: String,
        reason: String,
    },

    #[error("'{model}' declares property '{property}' as both a {first} and a {second}")]
    #[diagnostic(
        code(modelts::member_collision),
        help("rename one of the members, or set member_collision = \"override\"")
    )]
    MemberCollision {
        model: ClassName,
        property: String,
        first: MemberKind,
        second: MemberKind,
    },
}

impl InspectError {
    pub(crate) fn reflection(
        model: &ClassName,
        member: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        InspectError::Reflection {
            model: model.clone(),
            member: member.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message() {
        let err = InspectError::MemberCollision {
            model: ClassName::new("App\\Models\\User"),
            property: "name".into(),
            first: MemberKind::Column,
            second: MemberKind::LegacyAccessor,
        };
        assert_eq!(
            err.to_string(),
            "'App\\Models\\User' declares property 'name' as both a column and a legacy accessor"
        );
    }

    #[test]
    fn test_reflection_message() {
        let err = InspectError::reflection(&ClassName::new("App\\Post"), "author", "no relation");
        assert_eq!(err.to_string(), "failed to reflect 'App\\Post::author': no relation");
    }
}
