//! Optional observability helpers for signing and token exchange.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth_signer.op` with the `op` (operation)
//!   and `stage` (call site) fields.
//! - Enable `metrics` to increment the `oauth_signer_op_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.
//!
//! Without either feature the helpers compile to no-ops.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// OAuth 1.0a request signing.
	OAuth1Signature,
	/// Compact JWT signing.
	JwtSignature,
	/// JWT-bearer token exchange.
	JwtBearer,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::OAuth1Signature => "oauth1_signature",
			OperationKind::JwtSignature => "jwt_signature",
			OperationKind::JwtBearer => "jwt_bearer",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `f` inside an operation span, recording attempt and outcome counters around it.
pub fn observe<T, F>(kind: OperationKind, stage: &'static str, f: F) -> Result<T>
where
	F: FnOnce() -> Result<T>,
{
	let _guard = OperationSpan::new(kind, stage).entered();

	record_outcome(kind, OperationOutcome::Attempt);

	let result = f();

	record_outcome(
		kind,
		if result.is_ok() { OperationOutcome::Success } else { OperationOutcome::Failure },
	);

	result
}
