// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Multiplex management: transport streams that bundle several channels
//! into one statistically multiplexed output, plus the programs inside
//! them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::describe::Describer;
use crate::error::{ModelError, Result};
use crate::tags::{self, Tags};

/// Lifecycle state of a multiplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultiplexState {
    Creating,
    CreateFailed,
    Idle,
    Starting,
    Running,
    Recovering,
    Stopping,
    Stopped,
    Deleting,
    Deleted,
}

impl MultiplexState {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[
        Self::Creating,
        Self::CreateFailed,
        Self::Idle,
        Self::Starting,
        Self::Running,
        Self::Recovering,
        Self::Stopping,
        Self::Stopped,
        Self::Deleting,
        Self::Deleted,
    ];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "CREATING",
            Self::CreateFailed => "CREATE_FAILED",
            Self::Idle => "IDLE",
            Self::Starting => "STARTING",
            Self::Running => "RUNNING",
            Self::Recovering => "RECOVERING",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::Deleting => "DELETING",
            Self::Deleted => "DELETED",
        }
    }

    /// True once the multiplex can no longer transition anywhere.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl fmt::Display for MultiplexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MultiplexState {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "MultiplexState",
                value: s.to_string(),
            })
    }
}

/// Which channel pipeline feeds a multiplex program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferredChannelPipeline {
    #[serde(rename = "CURRENTLY_ACTIVE")]
    CurrentlyActive,
    #[serde(rename = "PIPELINE_0")]
    Pipeline0,
    #[serde(rename = "PIPELINE_1")]
    Pipeline1,
}

impl PreferredChannelPipeline {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[
        Self::CurrentlyActive,
        Self::Pipeline0,
        Self::Pipeline1,
    ];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentlyActive => "CURRENTLY_ACTIVE",
            Self::Pipeline0 => "PIPELINE_0",
            Self::Pipeline1 => "PIPELINE_1",
        }
    }
}

impl fmt::Display for PreferredChannelPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferredChannelPipeline {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "PreferredChannelPipeline",
                value: s.to_string(),
            })
    }
}

/// Transport stream configuration of a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MultiplexSettings {
    /// Maximum video buffer delay. Range: 800–3000 milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_video_buffer_delay_milliseconds: Option<i64>,
    /// Total transport stream bitrate. Range: 1000000–100000000 bits/s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_stream_bitrate: Option<i64>,
    /// Transport stream id. Range: 0–65535.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_stream_id: Option<i64>,
    /// Bitrate reserved for ancillary data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_stream_reserved_bitrate: Option<i64>,
}

impl MultiplexSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum video buffer delay in milliseconds.
    pub fn with_maximum_video_buffer_delay_milliseconds(mut self, millis: i64) -> Self {
        self.maximum_video_buffer_delay_milliseconds = Some(millis);
        self
    }

    /// Set the total transport stream bitrate.
    pub fn with_transport_stream_bitrate(mut self, bitrate: i64) -> Self {
        self.transport_stream_bitrate = Some(bitrate);
        self
    }

    /// Set the transport stream id.
    pub fn with_transport_stream_id(mut self, id: i64) -> Self {
        self.transport_stream_id = Some(id);
        self
    }

    /// Set the reserved bitrate.
    pub fn with_transport_stream_reserved_bitrate(mut self, bitrate: i64) -> Self {
        self.transport_stream_reserved_bitrate = Some(bitrate);
        self
    }
}

impl fmt::Display for MultiplexSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field(
                "MaximumVideoBufferDelayMilliseconds",
                &self.maximum_video_buffer_delay_milliseconds,
            )
            .field("TransportStreamBitrate", &self.transport_stream_bitrate)
            .field("TransportStreamId", &self.transport_stream_id)
            .field(
                "TransportStreamReservedBitrate",
                &self.transport_stream_reserved_bitrate,
            )
            .finish()
    }
}

/// Delivery target of a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MultiplexOutputDestination {
    /// ARN of the granted entitlement the multiplex is delivered to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlement_arn: Option<String>,
}

impl fmt::Display for MultiplexOutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("EntitlementArn", &self.entitlement_arn)
            .finish()
    }
}

/// A multiplex resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Multiplex {
    /// Unique ARN of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Availability zones the pipelines run in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    /// Delivery targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<MultiplexOutputDestination>>,
    /// Unique id of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Transport stream configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_settings: Option<MultiplexSettings>,
    /// Name of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of currently running pipelines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipelines_running_count: Option<i64>,
    /// Number of programs in the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_count: Option<i64>,
    /// Lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MultiplexState>,
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl Multiplex {
    /// Add a single tag; fails if the key is already present.
    pub fn add_tag(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        tags::insert_unique(&mut self.tags, "Tags", key, value)
    }

    /// Clear all tags back to absent.
    pub fn clear_tags(&mut self) {
        self.tags = None;
    }
}

impl fmt::Display for Multiplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Arn", &self.arn)
            .field_list("AvailabilityZones", &self.availability_zones)
            .field_list("Destinations", &self.destinations)
            .field("Id", &self.id)
            .field("MultiplexSettings", &self.multiplex_settings)
            .field("Name", &self.name)
            .field("PipelinesRunningCount", &self.pipelines_running_count)
            .field("ProgramCount", &self.program_count)
            .field("State", &self.state)
            .field_map("Tags", &self.tags)
            .finish()
    }
}

/// Condensed multiplex shape returned by list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MultiplexSummary {
    /// Unique ARN of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Availability zones the pipelines run in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    /// Unique id of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Transport stream configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_settings: Option<MultiplexSettings>,
    /// Name of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of currently running pipelines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipelines_running_count: Option<i64>,
    /// Number of programs in the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_count: Option<i64>,
    /// Lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MultiplexState>,
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl fmt::Display for MultiplexSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Arn", &self.arn)
            .field_list("AvailabilityZones", &self.availability_zones)
            .field("Id", &self.id)
            .field("MultiplexSettings", &self.multiplex_settings)
            .field("Name", &self.name)
            .field("PipelinesRunningCount", &self.pipelines_running_count)
            .field("ProgramCount", &self.program_count)
            .field("State", &self.state)
            .field_map("Tags", &self.tags)
            .finish()
    }
}

/// Request to create a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMultiplexRequest {
    /// Availability zones to run the two pipelines in; exactly two expected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    /// Transport stream configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_settings: Option<MultiplexSettings>,
    /// Name of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl CreateMultiplexRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the availability zones.
    pub fn with_availability_zones(mut self, zones: Vec<String>) -> Self {
        self.availability_zones = Some(zones);
        self
    }

    /// Set the transport stream configuration.
    pub fn with_multiplex_settings(mut self, settings: MultiplexSettings) -> Self {
        self.multiplex_settings = Some(settings);
        self
    }

    /// Set the multiplex name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the idempotency token.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Replace the whole tag map.
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Add a single tag; fails if the key is already present.
    pub fn add_tag(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        tags::insert_unique(&mut self.tags, "Tags", key, value)
    }

    /// Clear all tags back to absent.
    pub fn clear_tags(&mut self) {
        self.tags = None;
    }
}

impl fmt::Display for CreateMultiplexRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field_list("AvailabilityZones", &self.availability_zones)
            .field("MultiplexSettings", &self.multiplex_settings)
            .field("Name", &self.name)
            .field("RequestId", &self.request_id)
            .field_map("Tags", &self.tags)
            .finish()
    }
}

/// Result of creating a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMultiplexResult {
    /// The created multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex: Option<Multiplex>,
}

impl fmt::Display for CreateMultiplexResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Multiplex", &self.multiplex)
            .finish()
    }
}

/// Request to describe a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeMultiplexRequest {
    /// Id of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_id: Option<String>,
}

impl DescribeMultiplexRequest {
    /// Create a request for the given multiplex.
    pub fn new(multiplex_id: impl Into<String>) -> Self {
        Self {
            multiplex_id: Some(multiplex_id.into()),
        }
    }
}

impl fmt::Display for DescribeMultiplexRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MultiplexId", &self.multiplex_id)
            .finish()
    }
}

/// Result of describing a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeMultiplexResult {
    /// The described multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex: Option<Multiplex>,
}

impl fmt::Display for DescribeMultiplexResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Multiplex", &self.multiplex)
            .finish()
    }
}

/// Request to start a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartMultiplexRequest {
    /// Id of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_id: Option<String>,
}

impl StartMultiplexRequest {
    /// Create a request for the given multiplex.
    pub fn new(multiplex_id: impl Into<String>) -> Self {
        Self {
            multiplex_id: Some(multiplex_id.into()),
        }
    }
}

impl fmt::Display for StartMultiplexRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MultiplexId", &self.multiplex_id)
            .finish()
    }
}

/// Result of starting a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartMultiplexResult {
    /// The starting multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex: Option<Multiplex>,
}

impl fmt::Display for StartMultiplexResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Multiplex", &self.multiplex)
            .finish()
    }
}

/// Request to stop a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopMultiplexRequest {
    /// Id of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_id: Option<String>,
}

impl StopMultiplexRequest {
    /// Create a request for the given multiplex.
    pub fn new(multiplex_id: impl Into<String>) -> Self {
        Self {
            multiplex_id: Some(multiplex_id.into()),
        }
    }
}

impl fmt::Display for StopMultiplexRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MultiplexId", &self.multiplex_id)
            .finish()
    }
}

/// Result of stopping a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopMultiplexResult {
    /// The stopping multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex: Option<Multiplex>,
}

impl fmt::Display for StopMultiplexResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Multiplex", &self.multiplex)
            .finish()
    }
}

/// Request to delete a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteMultiplexRequest {
    /// Id of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_id: Option<String>,
}

impl DeleteMultiplexRequest {
    /// Create a request for the given multiplex.
    pub fn new(multiplex_id: impl Into<String>) -> Self {
        Self {
            multiplex_id: Some(multiplex_id.into()),
        }
    }
}

impl fmt::Display for DeleteMultiplexRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MultiplexId", &self.multiplex_id)
            .finish()
    }
}

/// Result of deleting a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteMultiplexResult {
    /// The deleting multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex: Option<Multiplex>,
}

impl fmt::Display for DeleteMultiplexResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Multiplex", &self.multiplex)
            .finish()
    }
}

/// Request to list multiplexes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMultiplexesRequest {
    /// Page size. Range: 1–1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListMultiplexesRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the continuation token.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

impl fmt::Display for ListMultiplexesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

/// Result of listing multiplexes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMultiplexesResult {
    /// One page of multiplex summaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplexes: Option<Vec<MultiplexSummary>>,
    /// Token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListMultiplexesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field_list("Multiplexes", &self.multiplexes)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

/// DVB service descriptor signaled for a program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MultiplexProgramServiceDescriptor {
    /// Name of the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// Name of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

impl MultiplexProgramServiceDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider name.
    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = Some(name.into());
        self
    }

    /// Set the service name.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }
}

impl fmt::Display for MultiplexProgramServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ProviderName", &self.provider_name)
            .field("ServiceName", &self.service_name)
            .finish()
    }
}

/// Statmux rate-control bounds for a program's video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MultiplexStatmuxVideoSettings {
    /// Maximum statmux bitrate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_bitrate: Option<i64>,
    /// Minimum statmux bitrate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_bitrate: Option<i64>,
    /// Relative priority against the other programs. Range: -5–5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl MultiplexStatmuxVideoSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum bitrate.
    pub fn with_maximum_bitrate(mut self, bitrate: i64) -> Self {
        self.maximum_bitrate = Some(bitrate);
        self
    }

    /// Set the minimum bitrate.
    pub fn with_minimum_bitrate(mut self, bitrate: i64) -> Self {
        self.minimum_bitrate = Some(bitrate);
        self
    }

    /// Set the statmux priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl fmt::Display for MultiplexStatmuxVideoSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MaximumBitrate", &self.maximum_bitrate)
            .field("MinimumBitrate", &self.minimum_bitrate)
            .field("Priority", &self.priority)
            .finish()
    }
}

/// Video rate-control for a program: constant bitrate or statmux, not both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MultiplexVideoSettings {
    /// Constant bitrate in bits/s; mutually exclusive with statmux.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant_bitrate: Option<i64>,
    /// Statmux bounds; mutually exclusive with constant bitrate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statmux_settings: Option<MultiplexStatmuxVideoSettings>,
}

impl MultiplexVideoSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a constant bitrate.
    pub fn with_constant_bitrate(mut self, bitrate: i64) -> Self {
        self.constant_bitrate = Some(bitrate);
        self
    }

    /// Set statmux bounds.
    pub fn with_statmux_settings(mut self, settings: MultiplexStatmuxVideoSettings) -> Self {
        self.statmux_settings = Some(settings);
        self
    }
}

impl fmt::Display for MultiplexVideoSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ConstantBitrate", &self.constant_bitrate)
            .field("StatmuxSettings", &self.statmux_settings)
            .finish()
    }
}

/// Configuration of one program inside a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MultiplexProgramSettings {
    /// Which channel pipeline feeds the program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_channel_pipeline: Option<PreferredChannelPipeline>,
    /// MPEG-TS program number. Range: 0–65536.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_number: Option<i64>,
    /// DVB service descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_descriptor: Option<MultiplexProgramServiceDescriptor>,
    /// Video rate-control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_settings: Option<MultiplexVideoSettings>,
}

impl MultiplexProgramSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the feeding pipeline.
    pub fn with_preferred_channel_pipeline(mut self, pipeline: PreferredChannelPipeline) -> Self {
        self.preferred_channel_pipeline = Some(pipeline);
        self
    }

    /// Set the program number.
    pub fn with_program_number(mut self, number: i64) -> Self {
        self.program_number = Some(number);
        self
    }

    /// Set the service descriptor.
    pub fn with_service_descriptor(
        mut self,
        descriptor: MultiplexProgramServiceDescriptor,
    ) -> Self {
        self.service_descriptor = Some(descriptor);
        self
    }

    /// Set the video rate-control.
    pub fn with_video_settings(mut self, settings: MultiplexVideoSettings) -> Self {
        self.video_settings = Some(settings);
        self
    }
}

impl fmt::Display for MultiplexProgramSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field(
                "PreferredChannelPipeline",
                &self.preferred_channel_pipeline,
            )
            .field("ProgramNumber", &self.program_number)
            .field("ServiceDescriptor", &self.service_descriptor)
            .field("VideoSettings", &self.video_settings)
            .finish()
    }
}

/// Packet identifiers the service allocated for a program's streams.
///
/// All PIDs are in the 0–8191 range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MultiplexProgramPacketIdentifiersMap {
    /// PIDs of the audio streams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_pids: Option<Vec<i64>>,
    /// PID of the DVB teletext stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dvb_teletext_pid: Option<i64>,
    /// PID of the ETV platform stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etv_platform_pid: Option<i64>,
    /// PID of the ETV signal stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etv_signal_pid: Option<i64>,
    /// PIDs of the KLV data streams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub klv_data_pids: Option<Vec<i64>>,
    /// PID carrying the PCR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcr_pid: Option<i64>,
    /// PID of the program map table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmt_pid: Option<i64>,
    /// PID of the private metadata stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata_pid: Option<i64>,
    /// PIDs of the SCTE-27 subtitle streams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scte27_pids: Option<Vec<i64>>,
    /// PID of the SCTE-35 stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scte35_pid: Option<i64>,
    /// PID of the timed metadata stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timed_metadata_pid: Option<i64>,
    /// PID of the video stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_pid: Option<i64>,
}

impl fmt::Display for MultiplexProgramPacketIdentifiersMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field_list("AudioPids", &self.audio_pids)
            .field("DvbTeletextPid", &self.dvb_teletext_pid)
            .field("EtvPlatformPid", &self.etv_platform_pid)
            .field("EtvSignalPid", &self.etv_signal_pid)
            .field_list("KlvDataPids", &self.klv_data_pids)
            .field("PcrPid", &self.pcr_pid)
            .field("PmtPid", &self.pmt_pid)
            .field("PrivateMetadataPid", &self.private_metadata_pid)
            .field_list("Scte27Pids", &self.scte27_pids)
            .field("Scte35Pid", &self.scte35_pid)
            .field("TimedMetadataPid", &self.timed_metadata_pid)
            .field("VideoPid", &self.video_pid)
            .finish()
    }
}

/// A program inside a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MultiplexProgram {
    /// Id of the channel feeding the program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Program configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_program_settings: Option<MultiplexProgramSettings>,
    /// Allocated packet identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_identifiers_map: Option<MultiplexProgramPacketIdentifiersMap>,
    /// Name of the program, unique within the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

impl fmt::Display for MultiplexProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ChannelId", &self.channel_id)
            .field(
                "MultiplexProgramSettings",
                &self.multiplex_program_settings,
            )
            .field("PacketIdentifiersMap", &self.packet_identifiers_map)
            .field("ProgramName", &self.program_name)
            .finish()
    }
}

/// Request to add a program to a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMultiplexProgramRequest {
    /// Id of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_id: Option<String>,
    /// Program configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_program_settings: Option<MultiplexProgramSettings>,
    /// Name of the program, unique within the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl CreateMultiplexProgramRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the multiplex id.
    pub fn with_multiplex_id(mut self, multiplex_id: impl Into<String>) -> Self {
        self.multiplex_id = Some(multiplex_id.into());
        self
    }

    /// Set the program configuration.
    pub fn with_multiplex_program_settings(mut self, settings: MultiplexProgramSettings) -> Self {
        self.multiplex_program_settings = Some(settings);
        self
    }

    /// Set the program name.
    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    /// Set the idempotency token.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

impl fmt::Display for CreateMultiplexProgramRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MultiplexId", &self.multiplex_id)
            .field(
                "MultiplexProgramSettings",
                &self.multiplex_program_settings,
            )
            .field("ProgramName", &self.program_name)
            .field("RequestId", &self.request_id)
            .finish()
    }
}

/// Result of adding a program to a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMultiplexProgramResult {
    /// The created program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_program: Option<MultiplexProgram>,
}

impl fmt::Display for CreateMultiplexProgramResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MultiplexProgram", &self.multiplex_program)
            .finish()
    }
}

/// Condensed program shape returned by list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MultiplexProgramSummary {
    /// Id of the channel feeding the program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Name of the program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

impl fmt::Display for MultiplexProgramSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ChannelId", &self.channel_id)
            .field("ProgramName", &self.program_name)
            .finish()
    }
}

/// Request to list the programs of a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMultiplexProgramsRequest {
    /// Page size. Range: 1–1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// Id of the multiplex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_id: Option<String>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListMultiplexProgramsRequest {
    /// Create a request for the given multiplex.
    pub fn new(multiplex_id: impl Into<String>) -> Self {
        Self {
            multiplex_id: Some(multiplex_id.into()),
            ..Self::default()
        }
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the continuation token.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

impl fmt::Display for ListMultiplexProgramsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MaxResults", &self.max_results)
            .field("MultiplexId", &self.multiplex_id)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

/// Result of listing the programs of a multiplex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMultiplexProgramsResult {
    /// One page of program summaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplex_programs: Option<Vec<MultiplexProgramSummary>>,
    /// Token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListMultiplexProgramsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field_list("MultiplexPrograms", &self.multiplex_programs)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplex_state_round_trip() {
        for v in MultiplexState::VALUES {
            assert_eq!(v.as_str().parse::<MultiplexState>().unwrap(), *v);
        }
    }

    #[test]
    fn test_preferred_channel_pipeline_serde() {
        assert_eq!(
            serde_json::to_string(&PreferredChannelPipeline::CurrentlyActive).unwrap(),
            "\"CURRENTLY_ACTIVE\""
        );
        let parsed: PreferredChannelPipeline = serde_json::from_str("\"PIPELINE_0\"").unwrap();
        assert_eq!(parsed, PreferredChannelPipeline::Pipeline0);
    }

    #[test]
    fn test_multiplex_settings_builder() {
        let settings = MultiplexSettings::new()
            .with_transport_stream_bitrate(25_000_000)
            .with_transport_stream_id(101)
            .with_maximum_video_buffer_delay_milliseconds(1000);

        assert_eq!(settings.transport_stream_bitrate, Some(25_000_000));
        assert_eq!(settings.transport_stream_id, Some(101));
        assert_eq!(
            settings.maximum_video_buffer_delay_milliseconds,
            Some(1000)
        );
        assert!(settings.transport_stream_reserved_bitrate.is_none());
    }

    #[test]
    fn test_program_settings_describe() {
        let settings = MultiplexProgramSettings::new()
            .with_program_number(3)
            .with_preferred_channel_pipeline(PreferredChannelPipeline::CurrentlyActive)
            .with_service_descriptor(
                MultiplexProgramServiceDescriptor::new()
                    .with_provider_name("LiveMux")
                    .with_service_name("news"),
            );
        assert_eq!(
            settings.to_string(),
            "{PreferredChannelPipeline: CURRENTLY_ACTIVE, ProgramNumber: 3, \
             ServiceDescriptor: {ProviderName: LiveMux, ServiceName: news}}"
        );
    }

    #[test]
    fn test_packet_identifiers_map_serde_field_names() {
        let map = MultiplexProgramPacketIdentifiersMap {
            audio_pids: Some(vec![482, 483]),
            video_pid: Some(481),
            pcr_pid: Some(481),
            ..MultiplexProgramPacketIdentifiersMap::default()
        };
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["AudioPids"][0], 482);
        assert_eq!(json["VideoPid"], 481);
        assert_eq!(json["PcrPid"], 481);
    }

    #[test]
    fn test_create_multiplex_request_tags() {
        let mut request = CreateMultiplexRequest::new().with_name("regional-mux");
        request.add_tag("region", "eu-west").unwrap();
        assert!(request.add_tag("region", "us-east").is_err());
        request.clear_tags();
        request.add_tag("region", "us-east").unwrap();
    }

    #[test]
    fn test_video_settings_equality() {
        let a = MultiplexVideoSettings::new().with_constant_bitrate(4_000_000);
        let b = MultiplexVideoSettings::new().with_constant_bitrate(4_000_000);
        let c = MultiplexVideoSettings::new().with_statmux_settings(
            MultiplexStatmuxVideoSettings::new()
                .with_minimum_bitrate(1_000_000)
                .with_maximum_bitrate(8_000_000),
        );
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
