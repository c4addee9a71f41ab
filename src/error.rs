use thiserror::Error;

/// Everything that can go wrong while managing the piece containers or
/// reading a menu command. None of these are fatal: the menu reports the
/// message and loops, and the failed operation leaves all state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the piece queue is full")]
    QueueFull,

    #[error("the piece queue is empty")]
    QueueEmpty,

    #[error("the reserve stack is full")]
    StackFull,

    #[error("the reserve stack is empty")]
    StackEmpty,

    #[error("the queue needs at least {needed} pieces for this move (has {available})")]
    QueueTooShort { needed: usize, available: usize },

    #[error("the reserve needs at least {needed} pieces for this move (has {available})")]
    StackTooShort { needed: usize, available: usize },

    #[error("invalid input: {input:?} is not a menu option")]
    InvalidInput { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_side() {
        assert!(GameError::QueueFull.to_string().contains("queue"));
        assert!(GameError::StackEmpty.to_string().contains("reserve"));
    }

    #[test]
    fn test_too_short_carries_counts() {
        let err = GameError::QueueTooShort {
            needed: 3,
            available: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('1'));
    }

    #[test]
    fn test_invalid_input_echoes_the_text() {
        let err = GameError::InvalidInput {
            input: "banana".to_string(),
        };
        assert!(err.to_string().contains("banana"));
    }
}
