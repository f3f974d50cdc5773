// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Input management: the sources a channel pulls or receives media from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::describe::Describer;
use crate::error::{ModelError, Result};
use crate::tags::{self, Tags};

/// Kind of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputType {
    UdpPush,
    RtpPush,
    RtmpPush,
    RtmpPull,
    UrlPull,
    Mp4File,
    TsFile,
    Mediaconnect,
}

impl InputType {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[
        Self::UdpPush,
        Self::RtpPush,
        Self::RtmpPush,
        Self::RtmpPull,
        Self::UrlPull,
        Self::Mp4File,
        Self::TsFile,
        Self::Mediaconnect,
    ];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UdpPush => "UDP_PUSH",
            Self::RtpPush => "RTP_PUSH",
            Self::RtmpPush => "RTMP_PUSH",
            Self::RtmpPull => "RTMP_PULL",
            Self::UrlPull => "URL_PULL",
            Self::Mp4File => "MP4_FILE",
            Self::TsFile => "TS_FILE",
            Self::Mediaconnect => "MEDIACONNECT",
        }
    }

    /// True for push-style inputs, where the upstream system sends media to
    /// endpoints the service allocates.
    pub fn is_push(&self) -> bool {
        matches!(self, Self::UdpPush | Self::RtpPush | Self::RtmpPush)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "InputType",
                value: s.to_string(),
            })
    }
}

/// Lifecycle state of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputState {
    Creating,
    Detached,
    Attached,
    Deleting,
    Deleted,
}

impl InputState {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[
        Self::Creating,
        Self::Detached,
        Self::Attached,
        Self::Deleting,
        Self::Deleted,
    ];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "CREATING",
            Self::Detached => "DETACHED",
            Self::Attached => "ATTACHED",
            Self::Deleting => "DELETING",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputState {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "InputState",
                value: s.to_string(),
            })
    }
}

/// Whether the input can feed both pipelines of a standard channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputClass {
    /// Two redundant sources, one per pipeline.
    Standard,
    /// One source; only usable by single-pipeline channels.
    SinglePipeline,
}

impl InputClass {
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

impl fmt::Display for InputClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputClass {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "InputClass",
                value: s.to_string(),
            })
    }
}

/// Behavior when a file input reaches its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputSourceEndBehavior {
    /// Black frames / silence until the next input switch.
    Continue,
    /// Restart the file from the beginning.
    Loop,
}

impl InputSourceEndBehavior {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Continue, Self::Loop];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "CONTINUE",
            Self::Loop => "LOOP",
        }
    }
}

impl fmt::Display for InputSourceEndBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputSourceEndBehavior {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "InputSourceEndBehavior",
                value: s.to_string(),
            })
    }
}

/// Noise/blocking filter applied to the decoded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputFilter {
    /// Filter only when the input looks like it needs it.
    Auto,
    Disabled,
    /// Filter regardless of input quality.
    Forced,
}

impl InputFilter {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Auto, Self::Disabled, Self::Forced];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Disabled => "DISABLED",
            Self::Forced => "FORCED",
        }
    }
}

impl fmt::Display for InputFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "InputFilter",
                value: s.to_string(),
            })
    }
}

/// Endpoint the service allocated for a push input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InputDestination {
    /// IP address of the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Port of the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Full URL the upstream system pushes to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl fmt::Display for InputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Ip", &self.ip)
            .field("Port", &self.port)
            .field("Url", &self.url)
            .finish()
    }
}

/// Endpoint settings requested when creating a push input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InputDestinationRequest {
    /// Stream name (application instance) for RTMP endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
}

impl InputDestinationRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stream name.
    pub fn with_stream_name(mut self, name: impl Into<String>) -> Self {
        self.stream_name = Some(name.into());
        self
    }
}

impl fmt::Display for InputDestinationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("StreamName", &self.stream_name)
            .finish()
    }
}

/// Upstream location of a pull input, as stored on the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InputSource {
    /// Parameter-store key holding the password, never the password itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_param: Option<String>,
    /// URL the service pulls from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Username for authenticated sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("PasswordParam", &self.password_param)
            .field("Url", &self.url)
            .field("Username", &self.username)
            .finish()
    }
}

/// Upstream location of a pull input, as supplied on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InputSourceRequest {
    /// Parameter-store key holding the password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_param: Option<String>,
    /// URL the service pulls from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Username for authenticated sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl InputSourceRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the password parameter key.
    pub fn with_password_param(mut self, param: impl Into<String>) -> Self {
        self.password_param = Some(param.into());
        self
    }

    /// Set the pull URL.
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

impl fmt::Display for InputSourceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("PasswordParam", &self.password_param)
            .field("Url", &self.url)
            .field("Username", &self.username)
            .finish()
    }
}

/// An input resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Input {
    /// Unique ARN of the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Ids of channels the input is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_channels: Option<Vec<String>>,
    /// Allocated endpoints, for push inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<InputDestination>>,
    /// Unique id of the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Single-pipeline or standard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_class: Option<InputClass>,
    /// Name of the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Attached security group ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    /// Upstream sources, for pull inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<InputSource>>,
    /// Lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<InputState>,
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Kind of input.
    #[serde(rename = "Type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Arn", &self.arn)
            .field_list("AttachedChannels", &self.attached_channels)
            .field_list("Destinations", &self.destinations)
            .field("Id", &self.id)
            .field("InputClass", &self.input_class)
            .field("Name", &self.name)
            .field_list("SecurityGroups", &self.security_groups)
            .field_list("Sources", &self.sources)
            .field("State", &self.state)
            .field_map("Tags", &self.tags)
            .field("Type", &self.input_type)
            .finish()
    }
}

/// Request to create an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateInputRequest {
    /// Endpoint settings, for push inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<InputDestinationRequest>>,
    /// Security group ids to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_security_groups: Option<Vec<String>>,
    /// Name of the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Role assumed by the service when reading the sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Upstream sources, for pull inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<InputSourceRequest>>,
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Kind of input.
    #[serde(rename = "Type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
}

impl CreateInputRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint settings.
    pub fn with_destinations(mut self, destinations: Vec<InputDestinationRequest>) -> Self {
        self.destinations = Some(destinations);
        self
    }

    /// Set the security group ids.
    pub fn with_input_security_groups(mut self, groups: Vec<String>) -> Self {
        self.input_security_groups = Some(groups);
        self
    }

    /// Set the input name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the idempotency token.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the read role.
    pub fn with_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
        self
    }

    /// Set the upstream sources.
    pub fn with_sources(mut self, sources: Vec<InputSourceRequest>) -> Self {
        self.sources = Some(sources);
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

    /// Set the input type.
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }
}

impl fmt::Display for CreateInputRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field_list("Destinations", &self.destinations)
            .field_list("InputSecurityGroups", &self.input_security_groups)
            .field("Name", &self.name)
            .field("RequestId", &self.request_id)
            .field("RoleArn", &self.role_arn)
            .field_list("Sources", &self.sources)
            .field_map("Tags", &self.tags)
            .field("Type", &self.input_type)
            .finish()
    }
}

/// Result of creating an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateInputResult {
    /// The created input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Input>,
}

impl fmt::Display for CreateInputResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("Input", &self.input).finish()
    }
}

/// Request to describe an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInputRequest {
    /// Id of the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,
}

impl DescribeInputRequest {
    /// Create a request for the given input.
    pub fn new(input_id: impl Into<String>) -> Self {
        Self {
            input_id: Some(input_id.into()),
        }
    }
}

impl fmt::Display for DescribeInputRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("InputId", &self.input_id).finish()
    }
}

/// Result of describing an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInputResult {
    /// The described input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Input>,
}

impl fmt::Display for DescribeInputResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("Input", &self.input).finish()
    }
}

/// Request to list inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListInputsRequest {
    /// Page size. Range: 1–1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListInputsRequest {
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

impl fmt::Display for ListInputsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

/// Result of listing inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListInputsResult {
    /// One page of inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Input>>,
    /// Token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListInputsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field_list("Inputs", &self.inputs)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

/// Request to delete an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteInputRequest {
    /// Id of the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,
}

impl DeleteInputRequest {
    /// Create a request for the given input.
    pub fn new(input_id: impl Into<String>) -> Self {
        Self {
            input_id: Some(input_id.into()),
        }
    }
}

impl fmt::Display for DeleteInputRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("InputId", &self.input_id).finish()
    }
}

/// Result of deleting an input. Carries no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteInputResult {}

impl fmt::Display for DeleteInputResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).finish()
    }
}

/// Selects a video stream by packet identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VideoSelectorPid {
    /// PID of the video stream. Range: 0–8191.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<i64>,
}

impl VideoSelectorPid {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PID.
    pub fn with_pid(mut self, pid: i64) -> Self {
        self.pid = Some(pid);
        self
    }
}

impl fmt::Display for VideoSelectorPid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f).field("Pid", &self.pid).finish()
    }
}

/// Selects a video stream by program id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VideoSelectorProgramId {
    /// Program id of the video stream. Range: 0–65536.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<i64>,
}

impl VideoSelectorProgramId {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the program id.
    pub fn with_program_id(mut self, program_id: i64) -> Self {
        self.program_id = Some(program_id);
        self
    }
}

impl fmt::Display for VideoSelectorProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ProgramId", &self.program_id)
            .finish()
    }
}

/// Union of video selector criteria; at most one member is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VideoSelectorSettings {
    /// Select by PID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_selector_pid: Option<VideoSelectorPid>,
    /// Select by program id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_selector_program_id: Option<VideoSelectorProgramId>,
}

impl VideoSelectorSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select by PID.
    pub fn with_video_selector_pid(mut self, selector: VideoSelectorPid) -> Self {
        self.video_selector_pid = Some(selector);
        self
    }

    /// Select by program id.
    pub fn with_video_selector_program_id(mut self, selector: VideoSelectorProgramId) -> Self {
        self.video_selector_program_id = Some(selector);
        self
    }
}

impl fmt::Display for VideoSelectorSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("VideoSelectorPid", &self.video_selector_pid)
            .field("VideoSelectorProgramId", &self.video_selector_program_id)
            .finish()
    }
}

/// Which video stream to extract from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VideoSelector {
    /// Selection criteria; absent selects the first video stream found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector_settings: Option<VideoSelectorSettings>,
}

impl VideoSelector {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection criteria.
    pub fn with_selector_settings(mut self, settings: VideoSelectorSettings) -> Self {
        self.selector_settings = Some(settings);
        self
    }
}

impl fmt::Display for VideoSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("SelectorSettings", &self.selector_settings)
            .finish()
    }
}

/// How a channel consumes an attached input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InputSettings {
    /// Filter strength. Range: 1–5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_strength: Option<i64>,
    /// Filter mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_filter: Option<InputFilter>,
    /// End-of-file behavior for file inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_end_behavior: Option<InputSourceEndBehavior>,
    /// Video stream selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_selector: Option<VideoSelector>,
}

impl InputSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter strength.
    pub fn with_filter_strength(mut self, strength: i64) -> Self {
        self.filter_strength = Some(strength);
        self
    }

    /// Set the filter mode.
    pub fn with_input_filter(mut self, filter: InputFilter) -> Self {
        self.input_filter = Some(filter);
        self
    }

    /// Set the end-of-file behavior.
    pub fn with_source_end_behavior(mut self, behavior: InputSourceEndBehavior) -> Self {
        self.source_end_behavior = Some(behavior);
        self
    }

    /// Set the video selector.
    pub fn with_video_selector(mut self, selector: VideoSelector) -> Self {
        self.video_selector = Some(selector);
        self
    }
}

impl fmt::Display for InputSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("FilterStrength", &self.filter_strength)
            .field("InputFilter", &self.input_filter)
            .field("SourceEndBehavior", &self.source_end_behavior)
            .field("VideoSelector", &self.video_selector)
            .finish()
    }
}

/// Binds an input to a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InputAttachment {
    /// Name of the attachment, unique within the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_attachment_name: Option<String>,
    /// Id of the attached input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,
    /// How the channel consumes the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_settings: Option<InputSettings>,
}

impl InputAttachment {
    /// Create an empty attachment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attachment name.
    pub fn with_input_attachment_name(mut self, name: impl Into<String>) -> Self {
        self.input_attachment_name = Some(name.into());
        self
    }

    /// Set the attached input id.
    pub fn with_input_id(mut self, input_id: impl Into<String>) -> Self {
        self.input_id = Some(input_id.into());
        self
    }

    /// Set the consumption settings.
    pub fn with_input_settings(mut self, settings: InputSettings) -> Self {
        self.input_settings = Some(settings);
        self
    }
}

impl fmt::Display for InputAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("InputAttachmentName", &self.input_attachment_name)
            .field("InputId", &self.input_id)
            .field("InputSettings", &self.input_settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_round_trip() {
        for v in InputType::VALUES {
            assert_eq!(v.as_str().parse::<InputType>().unwrap(), *v);
        }
    }

    #[test]
    fn test_input_type_is_push() {
        assert!(InputType::UdpPush.is_push());
        assert!(InputType::RtmpPush.is_push());
        assert!(!InputType::RtmpPull.is_push());
        assert!(!InputType::Mp4File.is_push());
    }

    #[test]
    fn test_input_type_serde_wire_strings() {
        assert_eq!(
            serde_json::to_string(&InputType::UrlPull).unwrap(),
            "\"URL_PULL\""
        );
        assert_eq!(
            serde_json::to_string(&InputType::Mp4File).unwrap(),
            "\"MP4_FILE\""
        );
    }

    #[test]
    fn test_input_state_parse_rejects_empty() {
        let err = "".parse::<InputState>().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnrecognizedEnumValue {
                type_name: "InputState",
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_video_selector_pid_equality_and_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = VideoSelectorPid::new().with_pid(100);
        let b = VideoSelectorPid::new().with_pid(100);
        assert_eq!(a, b);

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());

        let c = VideoSelectorPid::new().with_pid(101);
        assert_ne!(a, c);
    }

    #[test]
    fn test_create_input_request_builder() {
        let request = CreateInputRequest::new()
            .with_name("studio-feed")
            .with_input_type(InputType::RtmpPush)
            .with_destinations(vec![
                InputDestinationRequest::new().with_stream_name("live/primary"),
                InputDestinationRequest::new().with_stream_name("live/backup"),
            ])
            .with_request_id("req-1");

        assert_eq!(request.name, Some("studio-feed".to_string()));
        assert_eq!(request.input_type, Some(InputType::RtmpPush));
        assert_eq!(request.destinations.as_ref().unwrap().len(), 2);
        assert!(request.sources.is_none());
    }

    #[test]
    fn test_create_input_request_tags() {
        let mut request = CreateInputRequest::new();
        request.add_tag("env", "prod").unwrap();
        let err = request.add_tag("env", "staging").unwrap_err();
        assert!(matches!(err, ModelError::DuplicateKey { field: "Tags", .. }));

        request.clear_tags();
        assert!(request.tags.is_none());
        request.add_tag("env", "staging").unwrap();
        assert_eq!(
            request.tags.as_ref().unwrap().get("env"),
            Some(&"staging".to_string())
        );
    }

    #[test]
    fn test_input_serde_type_key() {
        let request = CreateInputRequest::new().with_input_type(InputType::UdpPush);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Type"], "UDP_PUSH");
    }

    #[test]
    fn test_input_settings_describe_nested() {
        let settings = InputSettings::new()
            .with_source_end_behavior(InputSourceEndBehavior::Loop)
            .with_video_selector(VideoSelector::new().with_selector_settings(
                VideoSelectorSettings::new()
                    .with_video_selector_pid(VideoSelectorPid::new().with_pid(256)),
            ));
        assert_eq!(
            settings.to_string(),
            "{SourceEndBehavior: LOOP, VideoSelector: {SelectorSettings: \
             {VideoSelectorPid: {Pid: 256}}}}"
        );
    }
}
