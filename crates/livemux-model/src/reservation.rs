// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Reserved-capacity offerings and the reservations purchased from them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::describe::Describer;
use crate::error::{ModelError, Result};
use crate::tags::{self, Tags};

/// Codec a reserved resource is rated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationCodec {
    Mpeg2,
    Avc,
    Hevc,
    Audio,
}

impl ReservationCodec {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Mpeg2, Self::Avc, Self::Hevc, Self::Audio];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mpeg2 => "MPEG2",
            Self::Avc => "AVC",
            Self::Hevc => "HEVC",
            Self::Audio => "AUDIO",
        }
    }
}

impl fmt::Display for ReservationCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationCodec {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "ReservationCodec",
                value: s.to_string(),
            })
    }
}

/// Bitrate tier of a reserved resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationMaximumBitrate {
    #[serde(rename = "MAX_10_MBPS")]
    Max10Mbps,
    #[serde(rename = "MAX_20_MBPS")]
    Max20Mbps,
    #[serde(rename = "MAX_50_MBPS")]
    Max50Mbps,
}

impl ReservationMaximumBitrate {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Max10Mbps, Self::Max20Mbps, Self::Max50Mbps];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Max10Mbps => "MAX_10_MBPS",
            Self::Max20Mbps => "MAX_20_MBPS",
            Self::Max50Mbps => "MAX_50_MBPS",
        }
    }
}

impl fmt::Display for ReservationMaximumBitrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationMaximumBitrate {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "ReservationMaximumBitrate",
                value: s.to_string(),
            })
    }
}

/// Framerate tier of a reserved resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationMaximumFramerate {
    #[serde(rename = "MAX_30_FPS")]
    Max30Fps,
    #[serde(rename = "MAX_60_FPS")]
    Max60Fps,
}

impl ReservationMaximumFramerate {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Max30Fps, Self::Max60Fps];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Max30Fps => "MAX_30_FPS",
            Self::Max60Fps => "MAX_60_FPS",
        }
    }
}

impl fmt::Display for ReservationMaximumFramerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationMaximumFramerate {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "ReservationMaximumFramerate",
                value: s.to_string(),
            })
    }
}

/// Resolution tier of a reserved resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationResolution {
    Sd,
    Hd,
    Fhd,
    Uhd,
}

impl ReservationResolution {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Sd, Self::Hd, Self::Fhd, Self::Uhd];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sd => "SD",
            Self::Hd => "HD",
            Self::Fhd => "FHD",
            Self::Uhd => "UHD",
        }
    }
}

impl fmt::Display for ReservationResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationResolution {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "ReservationResolution",
                value: s.to_string(),
            })
    }
}

/// Kind of resource a reservation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationResourceType {
    Input,
    Output,
    Multiplex,
    Channel,
}

impl ReservationResourceType {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[
        Self::Input,
        Self::Output,
        Self::Multiplex,
        Self::Channel,
    ];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::Output => "OUTPUT",
            Self::Multiplex => "MULTIPLEX",
            Self::Channel => "CHANNEL",
        }
    }
}

impl fmt::Display for ReservationResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationResourceType {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "ReservationResourceType",
                value: s.to_string(),
            })
    }
}

/// Add-on capability covered by a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationSpecialFeature {
    AdvancedAudio,
    AudioNormalization,
}

impl ReservationSpecialFeature {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::AdvancedAudio, Self::AudioNormalization];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdvancedAudio => "ADVANCED_AUDIO",
            Self::AudioNormalization => "AUDIO_NORMALIZATION",
        }
    }
}

impl fmt::Display for ReservationSpecialFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationSpecialFeature {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "ReservationSpecialFeature",
                value: s.to_string(),
            })
    }
}

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationState {
    Active,
    Expired,
    Canceled,
    Deleted,
}

impl ReservationState {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[
        Self::Active,
        Self::Expired,
        Self::Canceled,
        Self::Deleted,
    ];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::Canceled => "CANCELED",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for ReservationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationState {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "ReservationState",
                value: s.to_string(),
            })
    }
}

/// Unit of an offering's commitment duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferingDurationUnits {
    Months,
}

impl OfferingDurationUnits {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::Months];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Months => "MONTHS",
        }
    }
}

impl fmt::Display for OfferingDurationUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferingDurationUnits {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "OfferingDurationUnits",
                value: s.to_string(),
            })
    }
}

/// Payment structure of an offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferingType {
    NoUpfront,
}

impl OfferingType {
    /// All declared values, in declaration order.
    pub const VALUES: &'static [Self] = &[Self::NoUpfront];

    /// Wire string for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoUpfront => "NO_UPFRONT",
        }
    }
}

impl fmt::Display for OfferingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferingType {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedEnumValue {
                type_name: "OfferingType",
                value: s.to_string(),
            })
    }
}

/// Dimensions of the resource an offering or reservation covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReservationResourceSpecification {
    /// Channel class, as its wire string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_class: Option<String>,
    /// Codec tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<ReservationCodec>,
    /// Bitrate tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_bitrate: Option<ReservationMaximumBitrate>,
    /// Framerate tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_framerate: Option<ReservationMaximumFramerate>,
    /// Resolution tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ReservationResolution>,
    /// Kind of resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ReservationResourceType>,
    /// Add-on capability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_feature: Option<ReservationSpecialFeature>,
}

impl fmt::Display for ReservationResourceSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ChannelClass", &self.channel_class)
            .field("Codec", &self.codec)
            .field("MaximumBitrate", &self.maximum_bitrate)
            .field("MaximumFramerate", &self.maximum_framerate)
            .field("Resolution", &self.resolution)
            .field("ResourceType", &self.resource_type)
            .field("SpecialFeature", &self.special_feature)
            .finish()
    }
}

/// A purchasable reserved-capacity offering.
///
/// Prices are floating point, so offerings compare with `PartialEq` only
/// and do not hash.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Offering {
    /// Unique ARN of the offering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Commitment duration, in `duration_units`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Unit of the commitment duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_units: Option<OfferingDurationUnits>,
    /// One-time charge at purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<f64>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_description: Option<String>,
    /// Unique id of the offering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_id: Option<String>,
    /// Payment structure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingType>,
    /// Region the offering applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Resource dimensions covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_specification: Option<ReservationResourceSpecification>,
    /// Recurring usage charge per hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_price: Option<f64>,
}

impl fmt::Display for Offering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Arn", &self.arn)
            .field("CurrencyCode", &self.currency_code)
            .field("Duration", &self.duration)
            .field("DurationUnits", &self.duration_units)
            .field("FixedPrice", &self.fixed_price)
            .field("OfferingDescription", &self.offering_description)
            .field("OfferingId", &self.offering_id)
            .field("OfferingType", &self.offering_type)
            .field("Region", &self.region)
            .field("ResourceSpecification", &self.resource_specification)
            .field("UsagePrice", &self.usage_price)
            .finish()
    }
}

/// A purchased reservation.
///
/// Carries float prices like [`Offering`], so `PartialEq` only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Reservation {
    /// Unique ARN of the reservation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Number of reserved instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Commitment duration, in `duration_units`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Unit of the commitment duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_units: Option<OfferingDurationUnits>,
    /// When the reservation expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// One-time charge paid at purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<f64>,
    /// Customer-chosen name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable description of the source offering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_description: Option<String>,
    /// Id of the source offering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_id: Option<String>,
    /// Payment structure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingType>,
    /// Region the reservation applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Unique id of the reservation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
    /// Resource dimensions covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_specification: Option<ReservationResourceSpecification>,
    /// When the reservation took effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// Lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ReservationState>,
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Recurring usage charge per hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_price: Option<f64>,
}

impl Reservation {
    /// Add a single tag; fails if the key is already present.
    pub fn add_tag(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        tags::insert_unique(&mut self.tags, "Tags", key, value)
    }

    /// Clear all tags back to absent.
    pub fn clear_tags(&mut self) {
        self.tags = None;
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Arn", &self.arn)
            .field("Count", &self.count)
            .field("CurrencyCode", &self.currency_code)
            .field("Duration", &self.duration)
            .field("DurationUnits", &self.duration_units)
            .field("End", &self.end)
            .field("FixedPrice", &self.fixed_price)
            .field("Name", &self.name)
            .field("OfferingDescription", &self.offering_description)
            .field("OfferingId", &self.offering_id)
            .field("OfferingType", &self.offering_type)
            .field("Region", &self.region)
            .field("ReservationId", &self.reservation_id)
            .field("ResourceSpecification", &self.resource_specification)
            .field("Start", &self.start)
            .field("State", &self.state)
            .field_map("Tags", &self.tags)
            .field("UsagePrice", &self.usage_price)
            .finish()
    }
}

/// Request to list purchasable offerings, with optional dimension filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListOfferingsRequest {
    /// Filter by channel class wire string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_class: Option<String>,
    /// Filter by codec tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<ReservationCodec>,
    /// Filter by commitment duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Page size. Range: 1–1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// Filter by bitrate tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_bitrate: Option<ReservationMaximumBitrate>,
    /// Filter by framerate tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_framerate: Option<ReservationMaximumFramerate>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Filter by resolution tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ReservationResolution>,
    /// Filter by resource kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ReservationResourceType>,
    /// Filter by add-on capability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_feature: Option<ReservationSpecialFeature>,
}

impl ListOfferingsRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by channel class wire string.
    pub fn with_channel_class(mut self, class: impl Into<String>) -> Self {
        self.channel_class = Some(class.into());
        self
    }

    /// Filter by codec tier.
    pub fn with_codec(mut self, codec: ReservationCodec) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Filter by commitment duration.
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Filter by bitrate tier.
    pub fn with_maximum_bitrate(mut self, bitrate: ReservationMaximumBitrate) -> Self {
        self.maximum_bitrate = Some(bitrate);
        self
    }

    /// Filter by framerate tier.
    pub fn with_maximum_framerate(mut self, framerate: ReservationMaximumFramerate) -> Self {
        self.maximum_framerate = Some(framerate);
        self
    }

    /// Set the continuation token.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    /// Filter by resolution tier.
    pub fn with_resolution(mut self, resolution: ReservationResolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Filter by resource kind.
    pub fn with_resource_type(mut self, resource_type: ReservationResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    /// Filter by add-on capability.
    pub fn with_special_feature(mut self, feature: ReservationSpecialFeature) -> Self {
        self.special_feature = Some(feature);
        self
    }
}

impl fmt::Display for ListOfferingsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ChannelClass", &self.channel_class)
            .field("Codec", &self.codec)
            .field("Duration", &self.duration)
            .field("MaxResults", &self.max_results)
            .field("MaximumBitrate", &self.maximum_bitrate)
            .field("MaximumFramerate", &self.maximum_framerate)
            .field("NextToken", &self.next_token)
            .field("Resolution", &self.resolution)
            .field("ResourceType", &self.resource_type)
            .field("SpecialFeature", &self.special_feature)
            .finish()
    }
}

/// Result of listing offerings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListOfferingsResult {
    /// Token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// One page of offerings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offerings: Option<Vec<Offering>>,
}

impl fmt::Display for ListOfferingsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("NextToken", &self.next_token)
            .field_list("Offerings", &self.offerings)
            .finish()
    }
}

/// Request to purchase an offering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PurchaseOfferingRequest {
    /// Number of instances to reserve. Minimum 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// Customer-chosen name for the reservation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Id of the offering to purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_id: Option<String>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// When the reservation should take effect; defaults to now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl PurchaseOfferingRequest {
    /// Create a request for the given offering.
    pub fn new(offering_id: impl Into<String>) -> Self {
        Self {
            offering_id: Some(offering_id.into()),
            ..Self::default()
        }
    }

    /// Set the instance count.
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the reservation name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the idempotency token.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the effective start time.
    pub fn with_start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
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

impl fmt::Display for PurchaseOfferingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Count", &self.count)
            .field("Name", &self.name)
            .field("OfferingId", &self.offering_id)
            .field("RequestId", &self.request_id)
            .field("Start", &self.start)
            .field_map("Tags", &self.tags)
            .finish()
    }
}

/// Result of purchasing an offering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PurchaseOfferingResult {
    /// The created reservation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<Reservation>,
}

impl fmt::Display for PurchaseOfferingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("Reservation", &self.reservation)
            .finish()
    }
}

/// Request to list purchased reservations, with optional dimension filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListReservationsRequest {
    /// Filter by channel class wire string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_class: Option<String>,
    /// Filter by codec tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<ReservationCodec>,
    /// Page size. Range: 1–1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// Filter by bitrate tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_bitrate: Option<ReservationMaximumBitrate>,
    /// Filter by framerate tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_framerate: Option<ReservationMaximumFramerate>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Filter by resolution tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ReservationResolution>,
    /// Filter by resource kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ReservationResourceType>,
    /// Filter by add-on capability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_feature: Option<ReservationSpecialFeature>,
}

impl ListReservationsRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by channel class wire string.
    pub fn with_channel_class(mut self, class: impl Into<String>) -> Self {
        self.channel_class = Some(class.into());
        self
    }

    /// Filter by codec tier.
    pub fn with_codec(mut self, codec: ReservationCodec) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Filter by bitrate tier.
    pub fn with_maximum_bitrate(mut self, bitrate: ReservationMaximumBitrate) -> Self {
        self.maximum_bitrate = Some(bitrate);
        self
    }

    /// Filter by framerate tier.
    pub fn with_maximum_framerate(mut self, framerate: ReservationMaximumFramerate) -> Self {
        self.maximum_framerate = Some(framerate);
        self
    }

    /// Set the continuation token.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    /// Filter by resolution tier.
    pub fn with_resolution(mut self, resolution: ReservationResolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Filter by resource kind.
    pub fn with_resource_type(mut self, resource_type: ReservationResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    /// Filter by add-on capability.
    pub fn with_special_feature(mut self, feature: ReservationSpecialFeature) -> Self {
        self.special_feature = Some(feature);
        self
    }
}

impl fmt::Display for ListReservationsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("ChannelClass", &self.channel_class)
            .field("Codec", &self.codec)
            .field("MaxResults", &self.max_results)
            .field("MaximumBitrate", &self.maximum_bitrate)
            .field("MaximumFramerate", &self.maximum_framerate)
            .field("NextToken", &self.next_token)
            .field("Resolution", &self.resolution)
            .field("ResourceType", &self.resource_type)
            .field("SpecialFeature", &self.special_feature)
            .finish()
    }
}

/// Result of listing reservations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListReservationsResult {
    /// Token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// One page of reservations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations: Option<Vec<Reservation>>,
}

impl fmt::Display for ListReservationsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Describer::new(f)
            .field("NextToken", &self.next_token)
            .field_list("Reservations", &self.reservations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_maximum_framerate_wire_strings() {
        assert_eq!(ReservationMaximumFramerate::Max30Fps.as_str(), "MAX_30_FPS");
        assert_eq!(
            serde_json::to_string(&ReservationMaximumBitrate::Max10Mbps).unwrap(),
            "\"MAX_10_MBPS\""
        );
        assert_eq!(
            "MAX_60_FPS".parse::<ReservationMaximumFramerate>().unwrap(),
            ReservationMaximumFramerate::Max60Fps
        );
    }

    #[test]
    fn test_unknown_reservation_state_rejected() {
        let err = "PENDING".parse::<ReservationState>().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnrecognizedEnumValue {
                type_name: "ReservationState",
                value: "PENDING".to_string(),
            }
        );
    }

    #[test]
    fn test_offering_equality_with_prices() {
        let a = Offering {
            offering_id: Some("87654321".to_string()),
            fixed_price: Some(0.0),
            usage_price: Some(1.999),
            ..Offering::default()
        };
        let b = a.clone();
        assert_eq!(a, b);

        let mut c = a.clone();
        c.usage_price = Some(2.0);
        assert_ne!(a, c);
    }

    #[test]
    fn test_reservation_timestamps_serde() {
        let reservation = Reservation {
            reservation_id: Some("1234567".to_string()),
            start: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()),
            state: Some(ReservationState::Active),
            ..Reservation::default()
        };
        let json = serde_json::to_string(&reservation).unwrap();
        let back: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reservation);
        assert!(json.contains("\"State\":\"ACTIVE\""));
    }

    #[test]
    fn test_purchase_offering_request_builder() {
        let request = PurchaseOfferingRequest::new("87654321")
            .with_count(2)
            .with_name("fhd-hevc-block");
        assert_eq!(request.offering_id.as_deref(), Some("87654321"));
        assert_eq!(request.count, Some(2));
        assert!(request.start.is_none());
        assert_eq!(
            request.to_string(),
            "{Count: 2, Name: fhd-hevc-block, OfferingId: 87654321}"
        );
    }

    #[test]
    fn test_purchase_offering_request_tags() {
        let mut request = PurchaseOfferingRequest::new("87654321");
        request.add_tag("team", "sports").unwrap();
        let err = request.add_tag("team", "news").unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "Tags",
                key: "team".to_string(),
            }
        );
        request.clear_tags();
        assert!(request.tags.is_none());
        request.add_tag("team", "news").unwrap();
    }

    #[test]
    fn test_reservation_tags() {
        let mut reservation = Reservation {
            reservation_id: Some("1234567".to_string()),
            ..Reservation::default()
        };
        reservation.add_tag("env", "prod").unwrap();
        assert!(reservation.add_tag("env", "staging").is_err());
        assert_eq!(
            reservation.tags.as_ref().unwrap().get("env"),
            Some(&"prod".to_string())
        );
        reservation.clear_tags();
        assert!(reservation.tags.is_none());
    }

    #[test]
    fn test_list_offerings_filters_serde_field_names() {
        let request = ListOfferingsRequest::new()
            .with_codec(ReservationCodec::Hevc)
            .with_resolution(ReservationResolution::Uhd)
            .with_max_results(25);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Codec"], "HEVC");
        assert_eq!(json["Resolution"], "UHD");
        assert_eq!(json["MaxResults"], 25);
    }
}
