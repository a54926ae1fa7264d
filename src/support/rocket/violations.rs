use tracing::debug;

use crate::support::constraint::{Constrained, Constraint};

use super::{RelationError, Value};

/// Collects the violations of one validation phase.
///
/// Fields are checked in order and every failure is recorded, so a phase
/// never stops at its first bad field.
#[derive(Debug)]
pub(super) struct Violations {
    relation: &'static str,
    messages: Vec<String>,
}

impl Violations {
    pub(super) fn new(relation: &'static str) -> Self {
        Self {
            relation,
            messages: Vec::new(),
        }
    }

    /// Type phase: returns the number, or records `message` if there is none.
    pub(super) fn float(&mut self, value: &Value, message: &str) -> Option<f64> {
        let number = value.as_float();
        if number.is_none() {
            self.messages.push(message.to_string());
        }
        number
    }

    /// Range phase: returns the constrained number, or records `message`.
    pub(super) fn constrain<C: Constraint<f64>>(
        &mut self,
        value: f64,
        message: &str,
    ) -> Option<Constrained<f64, C>> {
        match Constrained::new(value) {
            Ok(constrained) => Some(constrained),
            Err(_) => {
                self.messages.push(message.to_string());
                None
            }
        }
    }

    /// Ends the type phase, producing [`RelationError::InvalidType`].
    pub(super) fn invalid_type(self) -> RelationError {
        debug!(relation = self.relation, messages = ?self.messages, "rejected non-numeric input");
        RelationError::InvalidType(self.messages)
    }

    /// Ends the range phase, producing [`RelationError::OutOfRange`].
    pub(super) fn out_of_range(self) -> RelationError {
        debug!(relation = self.relation, messages = ?self.messages, "rejected out-of-range input");
        RelationError::OutOfRange(self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::constraint::StrictlyPositive;

    #[test]
    fn keeps_checking_after_a_failure() {
        let mut types = Violations::new("test");
        assert_eq!(types.float(&Value::from("a"), "first"), None);
        assert_eq!(types.float(&Value::from(2.0), "second"), Some(2.0));
        assert_eq!(types.float(&Value::from(3), "third"), None);

        assert_eq!(
            types.invalid_type(),
            RelationError::InvalidType(vec!["first".to_string(), "third".to_string()])
        );
    }

    #[test]
    fn constrain_records_rejections() {
        let mut ranges = Violations::new("test");
        assert!(ranges.constrain::<StrictlyPositive>(-1.0, "negative").is_none());
        assert!(ranges.constrain::<StrictlyPositive>(1.0, "positive").is_some());

        assert_eq!(
            ranges.out_of_range(),
            RelationError::OutOfRange(vec!["negative".to_string()])
        );
    }
}
