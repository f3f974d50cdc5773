// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Record construction, equality, and serialization tests for livemux-model.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use livemux_model::{
    ArchiveGroupSettings, Channel, ChannelClass, ChannelState, CreateChannelRequest,
    CreateInputRequest, CreateMultiplexRequest, EncoderSettings, InputAttachment, InputSettings,
    InputSourceEndBehavior, InputSourceRequest, InputType, ListChannelsRequest, LogLevel,
    ModelError, MultiplexSettings, Output, OutputDestination, OutputDestinationSettings,
    OutputGroup, OutputGroupSettings, OutputLocationRef, TimecodeConfig, TimecodeConfigSource,
    VideoDescription, VideoSelector, VideoSelectorPid, VideoSelectorSettings,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_new_record_has_no_fields_present() {
    let request = CreateChannelRequest::new();
    assert!(request.name.is_none());
    assert!(request.channel_class.is_none());
    assert!(request.tags.is_none());
    assert_eq!(request.to_string(), "{}");
}

#[test]
fn test_absent_distinct_from_present_default() {
    let absent = ListChannelsRequest::new();
    let zero = ListChannelsRequest::new().with_max_results(0);
    assert_ne!(absent, zero);
    assert!(absent.max_results.is_none());
    assert_eq!(zero.max_results, Some(0));
}

#[test]
fn test_clearing_a_field_restores_equality() {
    let blank = CreateChannelRequest::new();
    let mut request = CreateChannelRequest::new().with_log_level(LogLevel::Debug);
    assert_ne!(blank, request);
    request.log_level = None;
    assert_eq!(blank, request);
}

#[test]
fn test_field_wise_equality_and_hash() {
    let a = CreateChannelRequest::new()
        .with_name("evening-news")
        .with_channel_class(ChannelClass::Standard);
    let b = CreateChannelRequest::new()
        .with_name("evening-news")
        .with_channel_class(ChannelClass::Standard);
    let c = b.clone().with_channel_class(ChannelClass::SinglePipeline);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);
}

#[test]
fn test_sequence_equality_is_order_sensitive() {
    let forward = CreateInputRequest::new().with_input_security_groups(vec![
        "sg-1".to_string(),
        "sg-2".to_string(),
    ]);
    let reversed = CreateInputRequest::new().with_input_security_groups(vec![
        "sg-2".to_string(),
        "sg-1".to_string(),
    ]);
    assert_ne!(forward, reversed);
}

#[test]
fn test_tag_equality_is_order_insensitive() {
    let mut a = CreateChannelRequest::new();
    a.add_tag("env", "prod").unwrap();
    a.add_tag("team", "sports").unwrap();

    let mut b = CreateChannelRequest::new();
    b.add_tag("team", "sports").unwrap();
    b.add_tag("env", "prod").unwrap();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_duplicate_tag_key_rejected() {
    let mut request = CreateMultiplexRequest::new();
    request.add_tag("env", "prod").unwrap();
    let err = request.add_tag("env", "staging").unwrap_err();
    assert_eq!(
        err,
        ModelError::DuplicateKey {
            field: "Tags",
            key: "env".to_string(),
        }
    );
    // The original value survives the failed insert.
    assert_eq!(
        request.tags.as_ref().unwrap().get("env"),
        Some(&"prod".to_string())
    );
}

#[test]
fn test_nested_record_round_trip() {
    let encoder_settings = EncoderSettings::new()
        .with_timecode_config(TimecodeConfig::new().with_source(TimecodeConfigSource::Embedded))
        .with_video_descriptions(vec![VideoDescription::new()
            .with_name("video-hd")
            .with_width(1280)
            .with_height(720)])
        .with_output_groups(vec![OutputGroup::new()
            .with_name("archive")
            .with_output_group_settings(OutputGroupSettings::new().with_archive_group_settings(
                ArchiveGroupSettings::new()
                    .with_destination(
                        OutputLocationRef::new().with_destination_ref_id("dest-1"),
                    )
                    .with_rollover_interval(300),
            ))
            .with_outputs(vec![Output::new().with_output_name("primary")])]);

    let request = CreateChannelRequest::new()
        .with_name("evening-news")
        .with_destinations(vec![OutputDestination::new().with_id("dest-1").with_settings(
            vec![OutputDestinationSettings::new().with_url("s3://archive/evening-news")],
        )])
        .with_encoder_settings(encoder_settings);

    let json = serde_json::to_string(&request).unwrap();
    let back: CreateChannelRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
}

#[test]
fn test_absent_fields_omitted_from_json() {
    let request = CreateChannelRequest::new().with_name("evening-news");
    let json = serde_json::to_value(&request).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 1);
    assert_eq!(object["Name"], "evening-news");
    assert!(!object.contains_key("ChannelClass"));
    assert!(!object.contains_key("Tags"));
    assert!(!serde_json::to_string(&request).unwrap().contains("null"));
}

#[test]
fn test_empty_record_serializes_to_empty_object() {
    let request = ListChannelsRequest::new();
    assert_eq!(serde_json::to_string(&request).unwrap(), "{}");
}

#[test]
fn test_serde_uses_wire_field_names() {
    let request = CreateInputRequest::new()
        .with_name("stadium-feed")
        .with_input_type(InputType::RtpPush)
        .with_sources(vec![InputSourceRequest::new()
            .with_url("rtp://10.0.0.1:5000")
            .with_username("operator")]);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["Name"], "stadium-feed");
    assert_eq!(json["Type"], "RTP_PUSH");
    assert_eq!(json["Sources"][0]["Url"], "rtp://10.0.0.1:5000");
    assert_eq!(json["Sources"][0]["Username"], "operator");
}

#[test]
fn test_absent_fields_deserialize_as_none() {
    let channel: Channel =
        serde_json::from_str(r#"{"Id":"chan-7","State":"RUNNING"}"#).unwrap();
    assert_eq!(channel.id.as_deref(), Some("chan-7"));
    assert_eq!(channel.state, Some(ChannelState::Running));
    assert!(channel.arn.is_none());
    assert!(channel.tags.is_none());
}

#[test]
fn test_describe_prints_only_present_fields() {
    let attachment = InputAttachment::new()
        .with_input_attachment_name("stadium")
        .with_input_settings(
            InputSettings::new()
                .with_source_end_behavior(InputSourceEndBehavior::Loop)
                .with_video_selector(VideoSelector::new().with_selector_settings(
                    VideoSelectorSettings::new()
                        .with_video_selector_pid(VideoSelectorPid::new().with_pid(481)),
                )),
        );

    let rendered = attachment.to_string();
    assert!(rendered.contains("InputAttachmentName: stadium"));
    assert!(rendered.contains("SourceEndBehavior: LOOP"));
    assert!(rendered.contains("Pid: 481"));
    assert!(!rendered.contains("InputId"));
    assert!(!rendered.contains("FilterStrength"));
}

#[test]
fn test_multiplex_settings_describe_in_declaration_order() {
    let settings = MultiplexSettings::new()
        .with_transport_stream_id(42)
        .with_transport_stream_bitrate(25_000_000);
    assert_eq!(
        settings.to_string(),
        "{TransportStreamBitrate: 25000000, TransportStreamId: 42}"
    );
}
