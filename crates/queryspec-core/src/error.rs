use thiserror::Error as ThisError;

///
/// ExprError
///
/// The only fault class this engine owns: a predicate or selector body
/// referencing a parameter that its own lambda does not bind. This is a
/// construction-time precondition violation, not a runtime condition;
/// combination and application are total over well-formed inputs.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ExprError {
    #[error("expression references parameter '{name}' outside its own binding")]
    UnboundParam { name: String },
}
