// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Encoder settings carried inside a channel.
//!
//! These records describe what a running channel encodes and where the
//! encoded outputs land. They are pure wire shapes: numeric range notes on
//! individual fields (sharpness 0–100, rollover interval ≥ 1, …) are
//! advisory metadata enforced service-side, not by the model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::describe::Describer;
use crate::error::ModelError;

/// How AFD (active format description) codes are signaled in the video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AfdSignaling {
    /// Pass through AFD values detected in the input.
    Auto,
    /// Signal the fixed AFD value from `FixedAfd`.
    Fixed,
    /// Do not signal AFD.
    None,
}

impl AfdSignaling {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Auto, Self::Fixed, Self::None];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Fixed => "FIXED",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for AfdSignaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AfdSignaling {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "AfdSignaling",
                value: s.to_string(),
            })
    }
}

/// Four-bit AFD code signaled when `AfdSignaling` is `Fixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixedAfd {
    #[serde(rename = "AFD_0000")]
    Afd0000,
    #[serde(rename = "AFD_0010")]
    Afd0010,
    #[serde(rename = "AFD_0011")]
    Afd0011,
    #[serde(rename = "AFD_0100")]
    Afd0100,
    #[serde(rename = "AFD_1000")]
    Afd1000,
    #[serde(rename = "AFD_1001")]
    Afd1001,
    #[serde(rename = "AFD_1010")]
    Afd1010,
    #[serde(rename = "AFD_1011")]
    Afd1011,
    #[serde(rename = "AFD_1101")]
    Afd1101,
    #[serde(rename = "AFD_1110")]
    Afd1110,
    #[serde(rename = "AFD_1111")]
    Afd1111,
}

impl FixedAfd {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[
        Self::Afd0000,
        Self::Afd0010,
        Self::Afd0011,
        Self::Afd0100,
        Self::Afd1000,
        Self::Afd1001,
        Self::Afd1010,
        Self::Afd1011,
        Self::Afd1101,
        Self::Afd1110,
        Self::Afd1111,
    ];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Afd0000 => "AFD_0000",
            Self::Afd0010 => "AFD_0010",
            Self::Afd0011 => "AFD_0011",
            Self::Afd0100 => "AFD_0100",
            Self::Afd1000 => "AFD_1000",
            Self::Afd1001 => "AFD_1001",
            Self::Afd1010 => "AFD_1010",
            Self::Afd1011 => "AFD_1011",
            Self::Afd1101 => "AFD_1101",
            Self::Afd1110 => "AFD_1110",
            Self::Afd1111 => "AFD_1111",
        }
    }
}

impl fmt::Display for FixedAfd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixedAfd {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "FixedAfd",
                value: s.to_string(),
            })
    }
}

/// How video is scaled when input and output resolutions differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoDescriptionScalingBehavior {
    /// Preserve aspect ratio, pad as needed.
    Default,
    /// Stretch to the exact output resolution.
    StretchToOutput,
}

impl VideoDescriptionScalingBehavior {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Default, Self::StretchToOutput];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::StretchToOutput => "STRETCH_TO_OUTPUT",
        }
    }
}

impl fmt::Display for VideoDescriptionScalingBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoDescriptionScalingBehavior {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "VideoDescriptionScalingBehavior",
                value: s.to_string(),
            })
    }
}

/// Whether the output reacts to AFD codes found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoDescriptionRespondToAfd {
    /// Ignore input AFD.
    None,
    /// Copy input AFD into the output unchanged.
    Passthrough,
    /// Crop/scale according to the input AFD.
    Respond,
}

impl VideoDescriptionRespondToAfd {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::None, Self::Passthrough, Self::Respond];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Passthrough => "PASSTHROUGH",
            Self::Respond => "RESPOND",
        }
    }
}

impl fmt::Display for VideoDescriptionRespondToAfd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoDescriptionRespondToAfd {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "VideoDescriptionRespondToAfd",
                value: s.to_string(),
            })
    }
}

/// Source of the output timecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimecodeConfigSource {
    /// Timecode embedded in the source video.
    Embedded,
    /// Wall clock of the encoding host.
    Systemclock,
    /// Count up from 00:00:00:00 at channel start.
    Zerobased,
}

impl TimecodeConfigSource {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Embedded, Self::Systemclock, Self::Zerobased];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Embedded => "EMBEDDED",
            Self::Systemclock => "SYSTEMCLOCK",
            Self::Zerobased => "ZEROBASED",
        }
    }
}

impl fmt::Display for TimecodeConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimecodeConfigSource {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "TimecodeConfigSource",
                value: s.to_string(),
            })
    }
}

/// ISO 13818-1 audio type signaled for an audio description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioType {
    CleanEffects,
    HearingImpaired,
    Undefined,
    VisualImpairedCommentary,
}

impl AudioType {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[
        Self::CleanEffects,
        Self::HearingImpaired,
        Self::Undefined,
        Self::VisualImpairedCommentary,
    ];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CleanEffects => "CLEAN_EFFECTS",
            Self::HearingImpaired => "HEARING_IMPAIRED",
            Self::Undefined => "UNDEFINED",
            Self::VisualImpairedCommentary => "VISUAL_IMPAIRED_COMMENTARY",
        }
    }
}

impl fmt::Display for AudioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "AudioType",
                value: s.to_string(),
            })
    }
}

/// Reference from an output group to one of the channel's destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputLocationRef {
    /// `Id` of the referenced `OutputDestination`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ref_id: Option<String>,
}

impl OutputLocationRef {
    /// Create an empty reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the referenced destination id.
    pub fn with_destination_ref_id(mut self, id: impl Into<String>) -> Self {
        self.destination_ref_id = Some(id.into());
        self
    }
}

impl fmt::Display for OutputLocationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("DestinationRefId", &self.destination_ref_id)
            .finish()
    }
}

/// Settings for an archive output group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ArchiveGroupSettings {
    /// Where archive files are written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<OutputLocationRef>,
    /// Rollover interval in seconds. Range: 1 or greater.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollover_interval: Option<i64>,
}

impl ArchiveGroupSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the archive destination.
    pub fn with_destination(mut self, destination: OutputLocationRef) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Set the rollover interval in seconds.
    pub fn with_rollover_interval(mut self, seconds: i64) -> Self {
        self.rollover_interval = Some(seconds);
        self
    }
}

impl fmt::Display for ArchiveGroupSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Destination", &self.destination)
            .field("RolloverInterval", &self.rollover_interval)
            .finish()
    }
}

/// Per-output settings inside an archive group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ArchiveOutputSettings {
    /// File extension; defaults service-side from the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// String appended to the output file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_modifier: Option<String>,
}

impl ArchiveOutputSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Set the file name modifier.
    pub fn with_name_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.name_modifier = Some(modifier.into());
        self
    }
}

impl fmt::Display for ArchiveOutputSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Extension", &self.extension)
            .field("NameModifier", &self.name_modifier)
            .finish()
    }
}

/// Union of per-output settings; exactly one member is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputSettings {
    /// Archive output member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_output_settings: Option<ArchiveOutputSettings>,
}

impl OutputSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the archive member.
    pub fn with_archive_output_settings(mut self, settings: ArchiveOutputSettings) -> Self {
        self.archive_output_settings = Some(settings);
        self
    }
}

impl fmt::Display for OutputSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ArchiveOutputSettings", &self.archive_output_settings)
            .finish()
    }
}

/// One output within an output group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Output {
    /// Names of the audio descriptions rendered into this output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_description_names: Option<Vec<String>>,
    /// Names of the caption descriptions rendered into this output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_description_names: Option<Vec<String>>,
    /// Name of the output, unique within the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
    /// Output-type-specific settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_settings: Option<OutputSettings>,
    /// Name of the video description rendered into this output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_description_name: Option<String>,
}

impl Output {
    /// Create an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the audio description names.
    pub fn with_audio_description_names(mut self, names: Vec<String>) -> Self {
        self.audio_description_names = Some(names);
        self
    }

    /// Set the caption description names.
    pub fn with_caption_description_names(mut self, names: Vec<String>) -> Self {
        self.caption_description_names = Some(names);
        self
    }

    /// Set the output name.
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Set the output settings.
    pub fn with_output_settings(mut self, settings: OutputSettings) -> Self {
        self.output_settings = Some(settings);
        self
    }

    /// Set the video description name.
    pub fn with_video_description_name(mut self, name: impl Into<String>) -> Self {
        self.video_description_name = Some(name.into());
        self
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field_list("AudioDescriptionNames", &self.audio_description_names)
            .field_list("CaptionDescriptionNames", &self.caption_description_names)
            .field("OutputName", &self.output_name)
            .field("OutputSettings", &self.output_settings)
            .field("VideoDescriptionName", &self.video_description_name)
            .finish()
    }
}

/// Union of output-group settings; exactly one member is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputGroupSettings {
    /// Archive group member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_group_settings: Option<ArchiveGroupSettings>,
}

impl OutputGroupSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the archive member.
    pub fn with_archive_group_settings(mut self, settings: ArchiveGroupSettings) -> Self {
        self.archive_group_settings = Some(settings);
        self
    }
}

impl fmt::Display for OutputGroupSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ArchiveGroupSettings", &self.archive_group_settings)
            .finish()
    }
}

/// A group of outputs sharing a destination type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputGroup {
    /// Custom name for the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Group-level settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_group_settings: Option<OutputGroupSettings>,
    /// Outputs in this group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Output>>,
}

impl OutputGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the group settings.
    pub fn with_output_group_settings(mut self, settings: OutputGroupSettings) -> Self {
        self.output_group_settings = Some(settings);
        self
    }

    /// Set the outputs.
    pub fn with_outputs(mut self, outputs: Vec<Output>) -> Self {
        self.outputs = Some(outputs);
        self
    }
}

impl fmt::Display for OutputGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Name", &self.name)
            .field("OutputGroupSettings", &self.output_group_settings)
            .field_list("Outputs", &self.outputs)
            .finish()
    }
}

/// Timecode configuration for the channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TimecodeConfig {
    /// Where the timecode comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<TimecodeConfigSource>,
    /// Maximum drift in frames before the pipeline resynchronizes.
    /// Range: 1–1000000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_threshold: Option<i64>,
}

impl TimecodeConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timecode source.
    pub fn with_source(mut self, source: TimecodeConfigSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the sync threshold in frames.
    pub fn with_sync_threshold(mut self, frames: i64) -> Self {
        self.sync_threshold = Some(frames);
        self
    }
}

impl fmt::Display for TimecodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Source", &self.source)
            .field("SyncThreshold", &self.sync_threshold)
            .finish()
    }
}

/// One encoded audio rendition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AudioDescription {
    /// Name of the input audio selector feeding this description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_selector_name: Option<String>,
    /// Audio type signaled in the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_type: Option<AudioType>,
    /// RFC 5646 language code signaled in the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Name of the description, unique within the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AudioDescription {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source audio selector name.
    pub fn with_audio_selector_name(mut self, name: impl Into<String>) -> Self {
        self.audio_selector_name = Some(name.into());
        self
    }

    /// Set the signaled audio type.
    pub fn with_audio_type(mut self, audio_type: AudioType) -> Self {
        self.audio_type = Some(audio_type);
        self
    }

    /// Set the signaled language code.
    pub fn with_language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }

    /// Set the description name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for AudioDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("AudioSelectorName", &self.audio_selector_name)
            .field("AudioType", &self.audio_type)
            .field("LanguageCode", &self.language_code)
            .field("Name", &self.name)
            .finish()
    }
}

/// One encoded video rendition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VideoDescription {
    /// AFD signaling mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afd_signaling: Option<AfdSignaling>,
    /// Fixed AFD code, used when `afd_signaling` is `Fixed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_afd: Option<FixedAfd>,
    /// Output height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    /// Name of the description, unique within the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Reaction to AFD codes in the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respond_to_afd: Option<VideoDescriptionRespondToAfd>,
    /// Scaling behavior when resolutions differ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_behavior: Option<VideoDescriptionScalingBehavior>,
    /// Sharpness filter strength. Range: 0–100; 50 is recommended for most
    /// content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<i64>,
    /// Output width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
}

impl VideoDescription {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the AFD signaling mode.
    pub fn with_afd_signaling(mut self, mode: AfdSignaling) -> Self {
        self.afd_signaling = Some(mode);
        self
    }

    /// Set the fixed AFD code.
    pub fn with_fixed_afd(mut self, afd: FixedAfd) -> Self {
        self.fixed_afd = Some(afd);
        self
    }

    /// Set the output height.
    pub fn with_height(mut self, height: i64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the description name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the AFD response mode.
    pub fn with_respond_to_afd(mut self, mode: VideoDescriptionRespondToAfd) -> Self {
        self.respond_to_afd = Some(mode);
        self
    }

    /// Set the scaling behavior.
    pub fn with_scaling_behavior(mut self, behavior: VideoDescriptionScalingBehavior) -> Self {
        self.scaling_behavior = Some(behavior);
        self
    }

    /// Set the sharpness filter strength.
    pub fn with_sharpness(mut self, sharpness: i64) -> Self {
        self.sharpness = Some(sharpness);
        self
    }

    /// Set the output width.
    pub fn with_width(mut self, width: i64) -> Self {
        self.width = Some(width);
        self
    }
}

impl fmt::Display for VideoDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("AfdSignaling", &self.afd_signaling)
            .field("FixedAfd", &self.fixed_afd)
            .field("Height", &self.height)
            .field("Name", &self.name)
            .field("RespondToAfd", &self.respond_to_afd)
            .field("ScalingBehavior", &self.scaling_behavior)
            .field("Sharpness", &self.sharpness)
            .field("Width", &self.width)
            .finish()
    }
}

/// Full encoder configuration for a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EncoderSettings {
    /// Audio renditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_descriptions: Option<Vec<AudioDescription>>,
    /// Output groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_groups: Option<Vec<OutputGroup>>,
    /// Timecode configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timecode_config: Option<TimecodeConfig>,
    /// Video renditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_descriptions: Option<Vec<VideoDescription>>,
}

impl EncoderSettings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the audio descriptions.
    pub fn with_audio_descriptions(mut self, descriptions: Vec<AudioDescription>) -> Self {
        self.audio_descriptions = Some(descriptions);
        self
    }

    /// Set the output groups.
    pub fn with_output_groups(mut self, groups: Vec<OutputGroup>) -> Self {
        self.output_groups = Some(groups);
        self
    }

    /// Set the timecode configuration.
    pub fn with_timecode_config(mut self, config: TimecodeConfig) -> Self {
        self.timecode_config = Some(config);
        self
    }

    /// Set the video descriptions.
    pub fn with_video_descriptions(mut self, descriptions: Vec<VideoDescription>) -> Self {
        self.video_descriptions = Some(descriptions);
        self
    }
}

impl fmt::Display for EncoderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field_list("AudioDescriptions", &self.audio_descriptions)
            .field_list("OutputGroups", &self.output_groups)
            .field("TimecodeConfig", &self.timecode_config)
            .field_list("VideoDescriptions", &self.video_descriptions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_afd_round_trip() {
        for v in FixedAfd::VALUES {
            assert_eq!(v.as_str().parse::<FixedAfd>().unwrap(), *v);
        }
    }

    #[test]
    fn test_fixed_afd_serde_wire_strings() {
        let json = serde_json::to_string(&FixedAfd::Afd0000).unwrap();
        assert_eq!(json, "\"AFD_0000\"");
        let json = serde_json::to_string(&FixedAfd::Afd1111).unwrap();
        assert_eq!(json, "\"AFD_1111\"");
    }

    #[test]
    fn test_afd_signaling_parse_rejects_unknown() {
        let err = "AFD_9999".parse::<AfdSignaling>().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnrecognizedEnumValue {
                type_name: "AfdSignaling",
                value: "AFD_9999".to_string(),
            }
        );
    }

    #[test]
    fn test_scaling_behavior_serde() {
        let json = serde_json::to_string(&VideoDescriptionScalingBehavior::StretchToOutput).unwrap();
        assert_eq!(json, "\"STRETCH_TO_OUTPUT\"");
        let parsed: VideoDescriptionScalingBehavior =
            serde_json::from_str("\"DEFAULT\"").unwrap();
        assert_eq!(parsed, VideoDescriptionScalingBehavior::Default);
    }

    #[test]
    fn test_archive_group_settings_describe() {
        let settings = ArchiveGroupSettings::new().with_rollover_interval(5);
        let rendered = settings.to_string();
        assert!(rendered.contains("RolloverInterval: 5"));
        assert!(!rendered.contains("Destination"));
    }

    #[test]
    fn test_archive_group_settings_describe_with_destination() {
        let settings = ArchiveGroupSettings::new()
            .with_destination(OutputLocationRef::new().with_destination_ref_id("dest-1"))
            .with_rollover_interval(300);
        assert_eq!(
            settings.to_string(),
            "{Destination: {DestinationRefId: dest-1}, RolloverInterval: 300}"
        );
    }

    #[test]
    fn test_video_description_builder() {
        let desc = VideoDescription::new()
            .with_name("video_1080p")
            .with_width(1920)
            .with_height(1080)
            .with_afd_signaling(AfdSignaling::Fixed)
            .with_fixed_afd(FixedAfd::Afd1001)
            .with_sharpness(50);

        assert_eq!(desc.name, Some("video_1080p".to_string()));
        assert_eq!(desc.width, Some(1920));
        assert_eq!(desc.height, Some(1080));
        assert_eq!(desc.afd_signaling, Some(AfdSignaling::Fixed));
        assert_eq!(desc.fixed_afd, Some(FixedAfd::Afd1001));
        assert_eq!(desc.sharpness, Some(50));
        assert!(desc.respond_to_afd.is_none());
    }

    #[test]
    fn test_encoder_settings_serde_field_names() {
        let settings = EncoderSettings::new()
            .with_timecode_config(TimecodeConfig::new().with_source(TimecodeConfigSource::Embedded));
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["TimecodeConfig"]["Source"], "EMBEDDED");
    }

    #[test]
    fn test_output_group_equality_field_sensitive() {
        let a = OutputGroup::new().with_name("archive");
        let b = OutputGroup::new().with_name("archive");
        let c = OutputGroup::new().with_name("other");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
