// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Contract between the model layer and whatever carries requests to the
//! control plane. The model crate only defines the seam; wire codecs and
//! connection handling live in the transport crates that implement
//! [`Transport`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::channel::{
    CreateChannelRequest, CreateChannelResult, DeleteChannelRequest, DeleteChannelResult,
    DescribeChannelRequest, DescribeChannelResult, ListChannelsRequest, ListChannelsResult,
    StartChannelRequest, StartChannelResult, StopChannelRequest, StopChannelResult,
};
use crate::input::{
    CreateInputRequest, CreateInputResult, DeleteInputRequest, DeleteInputResult,
    DescribeInputRequest, DescribeInputResult, ListInputsRequest, ListInputsResult,
};
use crate::multiplex::{
    CreateMultiplexProgramRequest, CreateMultiplexProgramResult, CreateMultiplexRequest,
    CreateMultiplexResult, DeleteMultiplexRequest, DeleteMultiplexResult,
    DescribeMultiplexRequest, DescribeMultiplexResult, ListMultiplexProgramsRequest,
    ListMultiplexProgramsResult, ListMultiplexesRequest, ListMultiplexesResult,
    StartMultiplexRequest, StartMultiplexResult, StopMultiplexRequest, StopMultiplexResult,
};
use crate::reservation::{
    ListOfferingsRequest, ListOfferingsResult, ListReservationsRequest, ListReservationsResult,
    PurchaseOfferingRequest, PurchaseOfferingResult,
};

/// Failure at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The endpoint could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The service rejected or failed the request.
    #[error("server error {code}: {message}")]
    Server { code: i64, message: String },

    /// The request or response could not be encoded or decoded.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// A control-plane operation: a serializable request paired with the
/// result type the service answers with.
pub trait Operation: Serialize {
    /// Result record the service returns.
    type Output: DeserializeOwned;

    /// Wire name of the operation.
    const NAME: &'static str;
}

/// Carries operations to the control plane.
pub trait Transport {
    /// Submit one operation and decode its result.
    fn submit<O: Operation>(&self, operation: &O) -> Result<O::Output, TransportError>;
}

macro_rules! operations {
    ($($request:ty => $result:ty, $name:literal;)+) => {
        $(
            impl Operation for $request {
                type Output = $result;
                const NAME: &'static str = $name;
            }
        )+
    };
}

operations! {
    CreateChannelRequest => CreateChannelResult, "CreateChannel";
    DescribeChannelRequest => DescribeChannelResult, "DescribeChannel";
    ListChannelsRequest => ListChannelsResult, "ListChannels";
    StartChannelRequest => StartChannelResult, "StartChannel";
    StopChannelRequest => StopChannelResult, "StopChannel";
    DeleteChannelRequest => DeleteChannelResult, "DeleteChannel";

    CreateInputRequest => CreateInputResult, "CreateInput";
    DescribeInputRequest => DescribeInputResult, "DescribeInput";
    ListInputsRequest => ListInputsResult, "ListInputs";
    DeleteInputRequest => DeleteInputResult, "DeleteInput";

    CreateMultiplexRequest => CreateMultiplexResult, "CreateMultiplex";
    DescribeMultiplexRequest => DescribeMultiplexResult, "DescribeMultiplex";
    ListMultiplexesRequest => ListMultiplexesResult, "ListMultiplexes";
    StartMultiplexRequest => StartMultiplexResult, "StartMultiplex";
    StopMultiplexRequest => StopMultiplexResult, "StopMultiplex";
    DeleteMultiplexRequest => DeleteMultiplexResult, "DeleteMultiplex";
    CreateMultiplexProgramRequest => CreateMultiplexProgramResult, "CreateMultiplexProgram";
    ListMultiplexProgramsRequest => ListMultiplexProgramsResult, "ListMultiplexPrograms";

    ListOfferingsRequest => ListOfferingsResult, "ListOfferings";
    PurchaseOfferingRequest => PurchaseOfferingResult, "PurchaseOffering";
    ListReservationsRequest => ListReservationsResult, "ListReservations";
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory transport that answers every operation with a canned
    /// JSON document.
    struct CannedTransport {
        response: serde_json::Value,
    }

    impl Transport for CannedTransport {
        fn submit<O: Operation>(&self, operation: &O) -> Result<O::Output, TransportError> {
            serde_json::to_value(operation)
                .map_err(|e| TransportError::Serialization(e.to_string()))?;
            serde_json::from_value(self.response.clone())
                .map_err(|e| TransportError::Serialization(e.to_string()))
        }
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(CreateChannelRequest::NAME, "CreateChannel");
        assert_eq!(DeleteInputRequest::NAME, "DeleteInput");
        assert_eq!(
            CreateMultiplexProgramRequest::NAME,
            "CreateMultiplexProgram"
        );
        assert_eq!(PurchaseOfferingRequest::NAME, "PurchaseOffering");
    }

    #[test]
    fn test_submit_decodes_result_record() {
        let transport = CannedTransport {
            response: serde_json::json!({
                "Channel": { "Id": "chan-7", "State": "CREATING" }
            }),
        };
        let result = transport
            .submit(&CreateChannelRequest::new().with_name("evening-news"))
            .unwrap();
        let channel = result.channel.unwrap();
        assert_eq!(channel.id.as_deref(), Some("chan-7"));
        assert_eq!(channel.state, Some(crate::channel::ChannelState::Creating));
    }

    #[test]
    fn test_submit_surfaces_decode_failure() {
        let transport = CannedTransport {
            response: serde_json::json!({ "Channel": { "State": "NOT_A_REAL_VALUE" } }),
        };
        let err = transport
            .submit(&DescribeChannelRequest::new("chan-7"))
            .unwrap_err();
        assert!(matches!(err, TransportError::Serialization(_)));
    }

    #[test]
    fn test_server_error_display() {
        let err = TransportError::Server {
            code: 422,
            message: "channel not idle".to_string(),
        };
        assert_eq!(err.to_string(), "server error 422: channel not idle");
    }
}
