// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Channel lifecycle: create, describe, list, start, stop, delete.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::describe::Describer;
use crate::encoder::EncoderSettings;
use crate::error::{ModelError, Result};
use crate::input::InputAttachment;
use crate::tags::{self, Tags};

/// Pipeline redundancy of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelClass {
    /// Two encoder pipelines, one per availability zone.
    Standard,
    /// One pipeline, no redundancy.
    SinglePipeline,
}

impl ChannelClass {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Standard, Self::SinglePipeline];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::SinglePipeline => "SINGLE_PIPELINE",
        }
    }
}

impl fmt::Display for ChannelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelClass {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "ChannelClass",
                value: s.to_string(),
            })
    }
}

/// Lifecycle state of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelState {
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
    Updating,
    UpdateFailed,
}

impl ChannelState {
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
        Self::Updating,
        Self::UpdateFailed,
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
            Self::Updating => "UPDATING",
            Self::UpdateFailed => "UPDATE_FAILED",
        }
    }

    /// True once the channel can no longer transition anywhere.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelState {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "ChannelState",
                value: s.to_string(),
            })
    }
}

/// Verbosity of the channel's encoder logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
    Disabled,
}

impl LogLevel {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
        Self::Disabled,
    ];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Disabled => "DISABLED",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "LogLevel",
                value: s.to_string(),
            })
    }
}

/// Identifies one of the two encoder pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipelineId {
    #[serde(rename = "PIPELINE_0")]
    Pipeline0,
    #[serde(rename = "PIPELINE_1")]
    Pipeline1,
}

impl PipelineId {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Pipeline0, Self::Pipeline1];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pipeline0 => "PIPELINE_0",
            Self::Pipeline1 => "PIPELINE_1",
        }
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineId {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "PipelineId",
                value: s.to_string(),
            })
    }
}

/// Settings for one endpoint of an output destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputDestinationSettings {
    /// Parameter-store key holding the password, never the password itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_param: Option<String>,
    /// Stream name for RTMP destinations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// Destination URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Username for authenticated destinations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl OutputDestinationSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the password parameter key.
    pub fn with_password_param(mut self, param: impl Into<String>) -> Self {
        self.password_param = Some(param.into());
        self
    }

    /// Set the stream name.
    pub fn with_stream_name(mut self, name: impl Into<String>) -> Self {
        self.stream_name = Some(name.into());
        self
    }

    /// Set the destination URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

impl fmt::Display for OutputDestinationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("PasswordParam", &self.password_param)
            .field("StreamName", &self.stream_name)
            .field("Url", &self.url)
            .field("Username", &self.username)
            .finish()
    }
}

/// Where a channel sends one of its output groups.
///
/// Standard channels carry one settings entry per pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputDestination {
    /// User-chosen id, referenced by `OutputLocationRef`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Per-pipeline endpoint settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<OutputDestinationSettings>>,
}

impl OutputDestination {
    /// Create an empty destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the per-pipeline settings.
    pub fn with_settings(mut self, settings: Vec<OutputDestinationSettings>) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl fmt::Display for OutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Id", &self.id)
            .field_list("Settings", &self.settings)
            .finish()
    }
}

/// Egress endpoint allocated to a running channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelEgressEndpoint {
    /// Source IP traffic leaves the service from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
}

impl fmt::Display for ChannelEgressEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("SourceIp", &self.source_ip).finish()
    }
}

/// Runtime detail of one pipeline of a running channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PipelineDetail {
    /// Name of the input attachment the pipeline is currently using.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_input_attachment_name: Option<String>,
    /// Name of the input switch action that made it active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_input_switch_action_name: Option<String>,
    /// Which pipeline this is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<PipelineId>,
}

impl fmt::Display for PipelineDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field(
                "ActiveInputAttachmentName",
                &self.active_input_attachment_name,
            )
            .field(
                "ActiveInputSwitchActionName",
                &self.active_input_switch_action_name,
            )
            .field("PipelineId", &self.pipeline_id)
            .finish()
    }
}

/// A channel resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Channel {
    /// Unique ARN of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Pipeline redundancy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_class: Option<ChannelClass>,
    /// Output destinations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<OutputDestination>>,
    /// Allocated egress endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress_endpoints: Option<Vec<ChannelEgressEndpoint>>,
    /// Encoder configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoder_settings: Option<EncoderSettings>,
    /// Unique id of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Attached inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_attachments: Option<Vec<InputAttachment>>,
    /// Encoder log verbosity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// Name of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Per-pipeline runtime details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_details: Option<Vec<PipelineDetail>>,
    /// Number of currently running pipelines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipelines_running_count: Option<i64>,
    /// Role assumed by the service on behalf of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ChannelState>,
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl Channel {
    /// Add a single tag; fails if the key is already present.
    pub fn add_tag(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        tags::insert_unique(&mut self.tags, "Tags", key, value)
    }

    /// Clear all tags back to absent.
    pub fn clear_tags(&mut self) {
        self.tags = None;
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Arn", &self.arn)
            .field("ChannelClass", &self.channel_class)
            .field_list("Destinations", &self.destinations)
            .field_list("EgressEndpoints", &self.egress_endpoints)
            .field("EncoderSettings", &self.encoder_settings)
            .field("Id", &self.id)
            .field_list("InputAttachments", &self.input_attachments)
            .field("LogLevel", &self.log_level)
            .field("Name", &self.name)
            .field_list("PipelineDetails", &self.pipeline_details)
            .field("PipelinesRunningCount", &self.pipelines_running_count)
            .field("RoleArn", &self.role_arn)
            .field("State", &self.state)
            .field_map("Tags", &self.tags)
            .finish()
    }
}

/// Condensed channel shape returned by list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelSummary {
    /// Unique ARN of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Pipeline redundancy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_class: Option<ChannelClass>,
    /// Unique id of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Encoder log verbosity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// Name of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of currently running pipelines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipelines_running_count: Option<i64>,
    /// Lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ChannelState>,
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl fmt::Display for ChannelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Arn", &self.arn)
            .field("ChannelClass", &self.channel_class)
            .field("Id", &self.id)
            .field("LogLevel", &self.log_level)
            .field("Name", &self.name)
            .field("PipelinesRunningCount", &self.pipelines_running_count)
            .field("State", &self.state)
            .field_map("Tags", &self.tags)
            .finish()
    }
}

/// Request to create a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateChannelRequest {
    /// Pipeline redundancy; defaults service-side to `STANDARD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_class: Option<ChannelClass>,
    /// Output destinations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<OutputDestination>>,
    /// Encoder configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoder_settings: Option<EncoderSettings>,
    /// Inputs to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_attachments: Option<Vec<InputAttachment>>,
    /// Encoder log verbosity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// Name of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Role assumed by the service on behalf of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl CreateChannelRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pipeline redundancy.
    pub fn with_channel_class(mut self, channel_class: ChannelClass) -> Self {
        self.channel_class = Some(channel_class);
        self
    }

    /// Set the output destinations.
    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = Some(destinations);
        self
    }

    /// Set the encoder configuration.
    pub fn with_encoder_settings(mut self, settings: EncoderSettings) -> Self {
        self.encoder_settings = Some(settings);
        self
    }

    /// Set the input attachments.
    pub fn with_input_attachments(mut self, attachments: Vec<InputAttachment>) -> Self {
        self.input_attachments = Some(attachments);
        self
    }

    /// Set the log verbosity.
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = Some(log_level);
        self
    }

    /// Set the channel name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the idempotency token.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the channel role.
    pub fn with_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
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

impl fmt::Display for CreateChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ChannelClass", &self.channel_class)
            .field_list("Destinations", &self.destinations)
            .field("EncoderSettings", &self.encoder_settings)
            .field_list("InputAttachments", &self.input_attachments)
            .field("LogLevel", &self.log_level)
            .field("Name", &self.name)
            .field("RequestId", &self.request_id)
            .field("RoleArn", &self.role_arn)
            .field_map("Tags", &self.tags)
            .finish()
    }
}

/// Result of creating a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateChannelResult {
    /// The created channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
}

impl fmt::Display for CreateChannelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("Channel", &self.channel).finish()
    }
}

/// Request to describe a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeChannelRequest {
    /// Id of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl DescribeChannelRequest {
    /// Create a request for the given channel.
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: Some(channel_id.into()),
        }
    }
}

impl fmt::Display for DescribeChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ChannelId", &self.channel_id)
            .finish()
    }
}

/// Result of describing a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeChannelResult {
    /// The described channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
}

impl fmt::Display for DescribeChannelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("Channel", &self.channel).finish()
    }
}

/// Request to list channels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelsRequest {
    /// Page size. Range: 1–1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListChannelsRequest {
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

impl fmt::Display for ListChannelsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

/// Result of listing channels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelsResult {
    /// One page of channel summaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ChannelSummary>>,
    /// Token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListChannelsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field_list("Channels", &self.channels)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

/// Request to start a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartChannelRequest {
    /// Id of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl StartChannelRequest {
    /// Create a request for the given channel.
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: Some(channel_id.into()),
        }
    }
}

impl fmt::Display for StartChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ChannelId", &self.channel_id)
            .finish()
    }
}

/// Result of starting a channel; reflects the channel as the start begins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartChannelResult {
    /// The starting channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
}

impl fmt::Display for StartChannelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("Channel", &self.channel).finish()
    }
}

/// Request to stop a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopChannelRequest {
    /// Id of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl StopChannelRequest {
    /// Create a request for the given channel.
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: Some(channel_id.into()),
        }
    }
}

impl fmt::Display for StopChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ChannelId", &self.channel_id)
            .finish()
    }
}

/// Result of stopping a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopChannelResult {
    /// The stopping channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
}

impl fmt::Display for StopChannelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("Channel", &self.channel).finish()
    }
}

/// Request to delete a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteChannelRequest {
    /// Id of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl DeleteChannelRequest {
    /// Create a request for the given channel.
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: Some(channel_id.into()),
        }
    }
}

impl fmt::Display for DeleteChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ChannelId", &self.channel_id)
            .finish()
    }
}

/// Result of deleting a channel; reflects the channel entering deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteChannelResult {
    /// The deleting channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
}

impl fmt::Display for DeleteChannelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("Channel", &self.channel).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_class_round_trip() {
        for v in ChannelClass::VALUES {
            assert_eq!(v.as_str().parse::<ChannelClass>().unwrap(), *v);
        }
    }

    #[test]
    fn test_channel_class_from_wire_string() {
        assert_eq!(
            "STANDARD".parse::<ChannelClass>().unwrap(),
            ChannelClass::Standard
        );
        assert_eq!(ChannelClass::Standard.to_string(), "STANDARD");
        assert_eq!(
            "SINGLE_PIPELINE".parse::<ChannelClass>().unwrap(),
            ChannelClass::SinglePipeline
        );
    }

    #[test]
    fn test_channel_class_rejects_unknown() {
        for bad in ["", "NOT_A_REAL_VALUE", "standard"] {
            let err = bad.parse::<ChannelClass>().unwrap_err();
            assert_eq!(
                err,
                ModelError::UnrecognizedEnumValue {
                    type_name: "ChannelClass",
                    value: bad.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_channel_state_round_trip() {
        for v in ChannelState::VALUES {
            assert_eq!(v.as_str().parse::<ChannelState>().unwrap(), *v);
        }
    }

    #[test]
    fn test_channel_state_is_terminal() {
        assert!(ChannelState::Deleted.is_terminal());
        assert!(!ChannelState::Idle.is_terminal());
        assert!(!ChannelState::Deleting.is_terminal());
    }

    #[test]
    fn test_pipeline_id_serde_wire_strings() {
        assert_eq!(
            serde_json::to_string(&PipelineId::Pipeline0).unwrap(),
            "\"PIPELINE_0\""
        );
        let parsed: PipelineId = serde_json::from_str("\"PIPELINE_1\"").unwrap();
        assert_eq!(parsed, PipelineId::Pipeline1);
    }

    #[test]
    fn test_create_channel_request_builder() {
        let request = CreateChannelRequest::new()
            .with_name("sports-live")
            .with_channel_class(ChannelClass::Standard)
            .with_log_level(LogLevel::Warning)
            .with_role_arn("arn:livemux:iam::role/encoder")
            .with_request_id("req-42");

        assert_eq!(request.name, Some("sports-live".to_string()));
        assert_eq!(request.channel_class, Some(ChannelClass::Standard));
        assert_eq!(request.log_level, Some(LogLevel::Warning));
        assert_eq!(
            request.role_arn,
            Some("arn:livemux:iam::role/encoder".to_string())
        );
        assert!(request.destinations.is_none());
        assert!(request.encoder_settings.is_none());
    }

    #[test]
    fn test_create_channel_request_equality_reflexive_and_copy() {
        let a = CreateChannelRequest::new()
            .with_name("a")
            .with_channel_class(ChannelClass::SinglePipeline);
        let b = a.clone();
        assert_eq!(a, a);
        assert_eq!(a, b);

        let c = b.with_log_level(LogLevel::Debug);
        assert_ne!(a, c);
    }

    #[test]
    fn test_channel_tags_duplicate_and_clear() {
        let mut channel = Channel::default();
        channel.add_tag("team", "media").unwrap();
        assert!(matches!(
            channel.add_tag("team", "other"),
            Err(ModelError::DuplicateKey { .. })
        ));
        channel.clear_tags();
        channel.add_tag("team", "other").unwrap();
    }

    #[test]
    fn test_list_channels_request_serde_field_names() {
        let request = ListChannelsRequest::new()
            .with_max_results(50)
            .with_next_token("token-1");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["MaxResults"], 50);
        assert_eq!(json["NextToken"], "token-1");
    }

    #[test]
    fn test_describe_channel_request_wire_key() {
        let request = DescribeChannelRequest::new("chan-7");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ChannelId"], "chan-7");
    }

    #[test]
    fn test_channel_display_omits_absent_fields() {
        let channel = Channel {
            id: Some("chan-7".to_string()),
            state: Some(ChannelState::Running),
            ..Channel::default()
        };
        assert_eq!(channel.to_string(), "{Id: chan-7, State: RUNNING}");
    }
}
