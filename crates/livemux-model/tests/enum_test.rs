// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Wire-string parsing and formatting tests for the closed enums.

use livemux_model::{
    AfdSignaling, AudioType, ChannelClass, ChannelState, FixedAfd, InputSourceEndBehavior,
    InputState, InputType, LogLevel, ModelError, MultiplexState, OfferingType, PipelineId,
    PreferredChannelPipeline, ReservationMaximumBitrate, ReservationMaximumFramerate,
    ReservationResolution, TimecodeConfigSource, VideoDescriptionScalingBehavior,
};

#[test]
fn test_channel_state_round_trip() {
    for state in ChannelState::VALUES {
        assert_eq!(state.as_str().parse::<ChannelState>().unwrap(), *state);
    }
}

#[test]
fn test_input_type_round_trip() {
    for input_type in InputType::VALUES {
        assert_eq!(input_type.as_str().parse::<InputType>().unwrap(), *input_type);
    }
}

#[test]
fn test_multiplex_state_round_trip() {
    for state in MultiplexState::VALUES {
        assert_eq!(state.as_str().parse::<MultiplexState>().unwrap(), *state);
    }
}

#[test]
fn test_fixed_afd_round_trip() {
    for afd in FixedAfd::VALUES {
        assert_eq!(afd.as_str().parse::<FixedAfd>().unwrap(), *afd);
    }
}

#[test]
fn test_parse_is_case_sensitive() {
    assert!("running".parse::<ChannelState>().is_err());
    assert!("Running".parse::<ChannelState>().is_err());
    assert!("RUNNING".parse::<ChannelState>().is_ok());
}

#[test]
fn test_unrecognized_value_error_carries_input() {
    let err = "NOT_A_REAL_VALUE".parse::<InputState>().unwrap_err();
    assert_eq!(
        err,
        ModelError::UnrecognizedEnumValue {
            type_name: "InputState",
            value: "NOT_A_REAL_VALUE".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "unrecognized value \"NOT_A_REAL_VALUE\" for InputState"
    );
}

#[test]
fn test_empty_string_rejected() {
    assert!("".parse::<ChannelClass>().is_err());
    assert!("".parse::<LogLevel>().is_err());
    assert!("".parse::<AudioType>().is_err());
}

#[test]
fn test_whitespace_not_trimmed() {
    assert!(" RUNNING".parse::<ChannelState>().is_err());
    assert!("RUNNING ".parse::<ChannelState>().is_err());
}

#[test]
fn test_display_matches_wire_string() {
    assert_eq!(ChannelClass::SinglePipeline.to_string(), "SINGLE_PIPELINE");
    assert_eq!(InputType::UrlPull.to_string(), "URL_PULL");
    assert_eq!(AfdSignaling::None.to_string(), "NONE");
    assert_eq!(TimecodeConfigSource::Zerobased.to_string(), "ZEROBASED");
    assert_eq!(
        VideoDescriptionScalingBehavior::StretchToOutput.to_string(),
        "STRETCH_TO_OUTPUT"
    );
    assert_eq!(AudioType::CleanEffects.to_string(), "CLEAN_EFFECTS");
    assert_eq!(InputSourceEndBehavior::Loop.to_string(), "LOOP");
}

#[test]
fn test_digit_carrying_wire_strings() {
    assert_eq!(FixedAfd::Afd0000.to_string(), "AFD_0000");
    assert_eq!(PipelineId::Pipeline0.to_string(), "PIPELINE_0");
    assert_eq!(PipelineId::Pipeline1.to_string(), "PIPELINE_1");
    assert_eq!(
        PreferredChannelPipeline::Pipeline1.to_string(),
        "PIPELINE_1"
    );
    assert_eq!(
        ReservationMaximumBitrate::Max20Mbps.to_string(),
        "MAX_20_MBPS"
    );
    assert_eq!(
        ReservationMaximumFramerate::Max30Fps.to_string(),
        "MAX_30_FPS"
    );
}

#[test]
fn test_serde_agrees_with_as_str() {
    for state in ChannelState::VALUES {
        let json = serde_json::to_string(state).unwrap();
        assert_eq!(json, format!("\"{}\"", state.as_str()));
    }
    for afd in FixedAfd::VALUES {
        let json = serde_json::to_string(afd).unwrap();
        assert_eq!(json, format!("\"{}\"", afd.as_str()));
    }
    for resolution in ReservationResolution::VALUES {
        let json = serde_json::to_string(resolution).unwrap();
        assert_eq!(json, format!("\"{}\"", resolution.as_str()));
    }
}

#[test]
fn test_serde_rejects_unknown_variant() {
    assert!(serde_json::from_str::<ChannelState>("\"PAUSED\"").is_err());
    assert!(serde_json::from_str::<OfferingType>("\"ALL_UPFRONT\"").is_err());
}

#[test]
fn test_values_order_matches_declaration() {
    assert_eq!(ChannelState::VALUES[0], ChannelState::Creating);
    assert_eq!(
        *ChannelState::VALUES.last().unwrap(),
        ChannelState::UpdateFailed
    );
    assert_eq!(LogLevel::VALUES.len(), 5);
}

#[test]
fn test_terminal_states() {
    assert!(ChannelState::Deleted.is_terminal());
    assert!(!ChannelState::Deleting.is_terminal());
    assert!(!ChannelState::Stopped.is_terminal());
    assert!(MultiplexState::Deleted.is_terminal());
    assert!(!MultiplexState::Idle.is_terminal());
}

#[test]
fn test_input_type_push_classification() {
    assert!(InputType::RtmpPush.is_push());
    assert!(InputType::RtpPush.is_push());
    assert!(InputType::UdpPush.is_push());
    assert!(!InputType::UrlPull.is_push());
    assert!(!InputType::Mp4File.is_push());
    assert!(!InputType::Mediaconnect.is_push());
}
