//! Workflow operation identifiers
//!
//! Each inbound message targets one protocol operation, identified on the
//! wire by its API path. The path is decoded once at the system boundary
//! into an [`Operation`] and carried through as a typed value; the decrypt
//! pipeline itself never branches on it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An operation path that is not part of the protocol
#[derive(Error, Debug)]
#[error("unknown operation path: {0}")]
pub struct UnknownOperation(pub String);

/// The protocol workflow operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CoverageEligibilityCheck,
    CoverageEligibilityOnCheck,
    PreAuthSubmit,
    PreAuthOnSubmit,
    ClaimSubmit,
    ClaimOnSubmit,
    PaymentNoticeRequest,
    PaymentNoticeOnRequest,
    CommunicationRequest,
    CommunicationOnRequest,
    PredeterminationSubmit,
    PredeterminationOnSubmit,
    Status,
    OnStatus,
}

impl Operation {
    /// The API path of this operation
    pub fn path(&self) -> &'static str {
        match self {
            Operation::CoverageEligibilityCheck => "/coverageeligibility/check",
            Operation::CoverageEligibilityOnCheck => "/coverageeligibility/on_check",
            Operation::PreAuthSubmit => "/preauth/submit",
            Operation::PreAuthOnSubmit => "/preauth/on_submit",
            Operation::ClaimSubmit => "/claim/submit",
            Operation::ClaimOnSubmit => "/claim/on_submit",
            Operation::PaymentNoticeRequest => "/paymentnotice/request",
            Operation::PaymentNoticeOnRequest => "/paymentnotice/on_request",
            Operation::CommunicationRequest => "/communication/request",
            Operation::CommunicationOnRequest => "/communication/on_request",
            Operation::PredeterminationSubmit => "/predetermination/submit",
            Operation::PredeterminationOnSubmit => "/predetermination/on_submit",
            Operation::Status => "/hcx/status",
            Operation::OnStatus => "/hcx/on_status",
        }
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path {
            "/coverageeligibility/check" => Ok(Operation::CoverageEligibilityCheck),
            "/coverageeligibility/on_check" => Ok(Operation::CoverageEligibilityOnCheck),
            "/preauth/submit" => Ok(Operation::PreAuthSubmit),
            "/preauth/on_submit" => Ok(Operation::PreAuthOnSubmit),
            "/claim/submit" => Ok(Operation::ClaimSubmit),
            "/claim/on_submit" => Ok(Operation::ClaimOnSubmit),
            "/paymentnotice/request" => Ok(Operation::PaymentNoticeRequest),
            "/paymentnotice/on_request" => Ok(Operation::PaymentNoticeOnRequest),
            "/communication/request" => Ok(Operation::CommunicationRequest),
            "/communication/on_request" => Ok(Operation::CommunicationOnRequest),
            "/predetermination/submit" => Ok(Operation::PredeterminationSubmit),
            "/predetermination/on_submit" => Ok(Operation::PredeterminationOnSubmit),
            "/hcx/status" => Ok(Operation::Status),
            "/hcx/on_status" => Ok(Operation::OnStatus),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
