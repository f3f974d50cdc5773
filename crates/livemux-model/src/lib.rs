// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! LiveMux control-plane model layer
//!
//! Request, result, and resource records for the LiveMux live-video
//! control plane, together with the closed enums the wire protocol
//! uses. Every record field is optional; absent fields never appear in
//! serialized requests and are distinct from present-but-default
//! values.
//!
//! Transports implement the [`Transport`] trait to carry these records;
//! this crate deliberately contains no connection handling.
//!
//! # Example
//!
//! ```
//! use livemux_model::{ChannelClass, CreateChannelRequest, LogLevel};
//!
//! let request = CreateChannelRequest::new()
//!     .with_name("evening-news")
//!     .with_channel_class(ChannelClass::Standard)
//!     .with_log_level(LogLevel::Warning);
//!
//! // Only the fields that were set are rendered or serialized.
//! assert_eq!(
//!     request.to_string(),
//!     "{ChannelClass: STANDARD, LogLevel: WARNING, Name: evening-news}"
//! );
//! ```

mod channel;
mod config;
mod describe;
mod encoder;
mod error;
mod input;
mod multiplex;
mod reservation;
mod tags;
mod transport;

pub use channel::{
    Channel, ChannelClass, ChannelEgressEndpoint, ChannelState, ChannelSummary,
    CreateChannelRequest, CreateChannelResult, DeleteChannelRequest, DeleteChannelResult,
    DescribeChannelRequest, DescribeChannelResult, ListChannelsRequest, ListChannelsResult,
    LogLevel, OutputDestination, OutputDestinationSettings, PipelineDetail, PipelineId,
    StartChannelRequest, StartChannelResult, StopChannelRequest, StopChannelResult,
};
pub use config::{ClientConfig, ConfigError};
pub use encoder::{
    AfdSignaling, ArchiveGroupSettings, ArchiveOutputSettings, AudioDescription, AudioType,
    EncoderSettings, FixedAfd, Output, OutputGroup, OutputGroupSettings, OutputLocationRef,
    OutputSettings, TimecodeConfig, TimecodeConfigSource, VideoDescription,
    VideoDescriptionRespondToAfd, VideoDescriptionScalingBehavior,
};
pub use error::{ModelError, Result};
pub use input::{
    CreateInputRequest, CreateInputResult, DeleteInputRequest, DeleteInputResult,
    DescribeInputRequest, DescribeInputResult, Input, InputAttachment, InputClass,
    InputDestination, InputDestinationRequest, InputFilter, InputSettings, InputSource,
    InputSourceEndBehavior, InputSourceRequest, InputState, InputType, ListInputsRequest,
    ListInputsResult, VideoSelector, VideoSelectorPid, VideoSelectorProgramId,
    VideoSelectorSettings,
};
pub use multiplex::{
    CreateMultiplexProgramRequest, CreateMultiplexProgramResult, CreateMultiplexRequest,
    CreateMultiplexResult, DeleteMultiplexRequest, DeleteMultiplexResult,
    DescribeMultiplexRequest, DescribeMultiplexResult, ListMultiplexProgramsRequest,
    ListMultiplexProgramsResult, ListMultiplexesRequest, ListMultiplexesResult, Multiplex,
    MultiplexOutputDestination, MultiplexProgram, MultiplexProgramPacketIdentifiersMap,
    MultiplexProgramServiceDescriptor, MultiplexProgramSettings, MultiplexProgramSummary,
    MultiplexSettings, MultiplexState, MultiplexStatmuxVideoSettings, MultiplexSummary,
    MultiplexVideoSettings, PreferredChannelPipeline,
};
pub use reservation::{
    ListOfferingsRequest, ListOfferingsResult, ListReservationsRequest, ListReservationsResult,
    Offering, OfferingDurationUnits, OfferingType, PurchaseOfferingRequest,
    PurchaseOfferingResult, Reservation, ReservationCodec, ReservationMaximumBitrate,
    ReservationMaximumFramerate, ReservationResolution, ReservationResourceSpecification,
    ReservationResourceType, ReservationSpecialFeature, ReservationState,
};
pub use tags::Tags;
pub use transport::{Operation, Transport, TransportError};
