pub type MetricsResult<T> = Result<T, MetricsError>;

#[derive(thiserror::Error, Debug)]
pub enum MetricsError {
    #[error("engine error: {0}")]
    Engine(#[from] taffy::TaffyError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MetricsError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            MetricsError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            MetricsError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
        assert!(
            MetricsError::from(taffy::TaffyError::InvalidInputNode(taffy::NodeId::from(7u64)))
                .to_string()
                .contains("engine error:")
        );
    }

    #[test]
    fn session_errors_surface_as_metrics_errors() {
        let mut session = crate::pass::LayoutSession::new();
        let ghost = taffy::NodeId::from(u64::MAX);
        let err = session
            .set_direction(ghost, crate::engine::EngineDirection::Rtl)
            .unwrap_err();
        assert!(matches!(err, MetricsError::Validation(_)));
        assert!(!session.is_dirty(ghost));

        fn measure(node: taffy::NodeId) -> MetricsResult<()> {
            let computed: Result<(), taffy::TaffyError> =
                Err(taffy::TaffyError::InvalidInputNode(node));
            computed?;
            Ok(())
        }
        let err = measure(ghost).unwrap_err();
        assert!(matches!(err, MetricsError::Engine(_)));
    }

    #[test]
    fn malformed_tree_json_is_a_serde_error() {
        let err = crate::tree::TreeSpec::from_json("{\"root\": 3}").unwrap_err();
        assert!(matches!(err, MetricsError::Serde(_)));
    }
}
