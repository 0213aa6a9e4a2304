//! Bundled default-parameter schemas, one per kind.
//!
//! `bundled_schema` matches exhaustively so a kind added to the enumeration
//! without a schema arm does not compile.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use scriptgraph_core::{ParameterRole, ResourceReference, ResourceType, ShortId, TypedValue, Vector3};

use crate::kind::Kind;

/// One default parameter declared by a kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: Cow<'static, str>,
    pub default_value: TypedValue,
    pub role: ParameterRole,
}

impl ParameterSpec {
    pub fn new(name: impl Into<Cow<'static, str>>, default_value: TypedValue, role: ParameterRole) -> Self {
        Self {
            name: name.into(),
            default_value,
            role,
        }
    }
}

fn spec(name: &'static str, value: TypedValue, role: ParameterRole) -> ParameterSpec {
    ParameterSpec::new(name, value, role)
}

fn param(name: &'static str, value: TypedValue) -> ParameterSpec {
    spec(name, value, ParameterRole::Parameter)
}

fn input(name: &'static str, value: TypedValue) -> ParameterSpec {
    spec(name, value, ParameterRole::Input)
}

fn output(name: &'static str, value: TypedValue) -> ParameterSpec {
    spec(name, value, ParameterRole::Output)
}

fn state(name: &'static str, value: TypedValue) -> ParameterSpec {
    spec(name, value, ParameterRole::State)
}

fn internal(name: &'static str, value: TypedValue) -> ParameterSpec {
    spec(name, value, ParameterRole::Internal)
}

fn target(name: &'static str) -> ParameterSpec {
    spec(name, TypedValue::Link, ParameterRole::Target)
}

fn method(name: &'static str) -> ParameterSpec {
    spec(name, TypedValue::Link, ParameterRole::Method)
}

fn relay(name: &'static str) -> ParameterSpec {
    spec(name, TypedValue::Link, ParameterRole::Relay)
}

fn finished(name: &'static str) -> ParameterSpec {
    spec(name, TypedValue::Link, ParameterRole::Finished)
}

fn boolean(v: bool) -> TypedValue {
    TypedValue::Bool(v)
}

fn int(v: i32) -> TypedValue {
    TypedValue::Integer(v)
}

fn float(v: f32) -> TypedValue {
    TypedValue::Float(v)
}

fn string(v: &str) -> TypedValue {
    TypedValue::string(v)
}

fn vector() -> TypedValue {
    TypedValue::Vector(Vector3::ZERO)
}

fn enumeration(enum_type: &str, index: i32) -> TypedValue {
    TypedValue::enumeration(enum_type, index)
}

fn resource(resource_type: ResourceType) -> TypedValue {
    TypedValue::Resource(vec![ResourceReference {
        resource_id: ShortId::INVALID,
        resource_type,
    }])
}

/// Parameters declared directly by `kind`, in declaration order.
pub fn bundled_schema(kind: Kind) -> Vec<ParameterSpec> {
    match kind {
        Kind::EntityMethodInterface => vec![
            method("trigger"),
            relay("triggered"),
            method("refresh"),
            relay("refreshed"),
            method("start"),
            relay("started"),
            method("stop"),
            relay("stopped"),
            method("pause"),
            relay("paused"),
            method("resume"),
            relay("resumed"),
            method("enable"),
            relay("enabled"),
            method("disable"),
            relay("disabled"),
            method("simulate"),
            relay("simulated"),
            method("reset"),
            relay("reset_complete"),
        ],
        Kind::EntityInterface => vec![],
        Kind::ScriptInterface => vec![method("delete_me"), param("name", string(""))],
        Kind::CompositeInterface => vec![
            param("is_template", boolean(false)),
            internal("local_offset", TypedValue::Transform(Default::default())),
        ],
        Kind::ProxyInterface => vec![
            param("proxy_filter_targets", boolean(false)),
            method("proxy_enable"),
            relay("proxy_enabled"),
            method("proxy_disable"),
            relay("proxy_disabled"),
        ],
        Kind::ScriptVariable => vec![target("on_changed"), target("on_restored")],
        Kind::VariableBool => vec![state("initial_value", boolean(false))],
        Kind::VariableInt => vec![state("initial_value", int(0))],
        Kind::VariableFloat => vec![state("initial_value", float(0.0))],
        Kind::VariableString => vec![state("initial_value", string(""))],
        Kind::VariableVector => vec![state("initial_value", vector())],
        Kind::VariablePosition => vec![state("initial_value", TypedValue::Transform(Default::default()))],
        Kind::VariableEnum => vec![state("initial_value", enumeration("", 0))],
        Kind::BooleanLogicInterface => vec![
            target("on_true"),
            target("on_false"),
            input("LHS", boolean(false)),
            input("RHS", boolean(false)),
            output("Result", boolean(false)),
        ],
        Kind::LogicAnd | Kind::LogicOr => vec![],
        Kind::LogicNot => vec![method("invert")],
        Kind::LogicSwitch => vec![
            target("true_now_false"),
            target("false_now_true"),
            target("on_true"),
            target("on_false"),
            method("on_restored_true"),
            method("on_restored_false"),
            state("initial_value", boolean(false)),
            param("is_persistent", boolean(false)),
        ],
        Kind::LogicDelay => vec![
            target("on_delay_finished"),
            param("delay", float(0.0)),
            param("can_suspend", boolean(true)),
        ],
        Kind::LogicCounter => vec![
            target("on_under_limit"),
            target("on_limit"),
            target("on_over_limit"),
            method("restored_on_under_limit"),
            method("restored_on_limit"),
            method("restored_on_over_limit"),
            output("Result", int(0)),
            param("is_limitless", boolean(false)),
            param("trigger_limit", int(0)),
            param("non_persistent", boolean(false)),
        ],
        Kind::FloatMathInterface => vec![
            input("LHS", float(0.0)),
            input("RHS", float(0.0)),
            output("Result", float(0.0)),
        ],
        Kind::FloatAdd | Kind::FloatMultiply => vec![],
        Kind::FloatClamp => vec![
            input("Min", float(0.0)),
            input("Max", float(1.0)),
            input("Value", float(0.0)),
        ],
        Kind::VectorMathInterface => vec![
            input("LHS", vector()),
            input("RHS", vector()),
            output("Result", vector()),
        ],
        Kind::VectorAdd => vec![],
        Kind::VectorNormalise => vec![input("Input", vector())],
        Kind::TriggerSequence => vec![
            finished("finished"),
            param("trigger_mode", enumeration("ANIM_MODE", 0)),
            param("random_seed", int(0)),
            param("use_random_intervals", boolean(false)),
            param("no_duplicates", boolean(false)),
            param("interval_multiplier", float(1.0)),
            internal("sequence", TypedValue::Integer(0)),
        ],
        Kind::TriggerRandom => vec![
            target("Random_1"),
            target("Random_2"),
            target("Random_3"),
            target("Random_4"),
            param("Num", int(1)),
        ],
        Kind::TriggerSelect => vec![
            target("Pin_0"),
            target("Pin_1"),
            target("Pin_2"),
            target("Pin_3"),
            input("index", int(0)),
        ],
        Kind::TriggerDelay => vec![
            finished("delayed_trigger"),
            method("purge"),
            param("Hrs", float(0.0)),
            param("Min", float(0.0)),
            param("Sec", float(0.0)),
        ],
        Kind::SensorInterface => vec![
            target("on_activated"),
            target("on_deactivated"),
            param("start_on", boolean(true)),
            param("pause_on_reset", boolean(false)),
        ],
        Kind::TriggerVolumeFilter => vec![
            input("filter", boolean(true)),
            target("on_event_entered"),
            target("on_event_exited"),
        ],
        Kind::ProximityDetector => vec![
            input("filter", boolean(true)),
            input("detector_position", TypedValue::Transform(Default::default())),
            param("min_distance", float(0.0)),
            param("max_distance", float(10.0)),
            param("requires_line_of_sight", boolean(false)),
            param("proximity_duration", float(0.0)),
        ],
        Kind::CharacterTypeMonitor => vec![
            target("spawned"),
            target("despawned"),
            target("all_despawned"),
            param("AreAny", boolean(false)),
            param("character_class", enumeration("CHARACTER_CLASS_COMBINATION", 0)),
            param("trigger_on_start", boolean(false)),
            param("trigger_on_checkpoint_restart", boolean(false)),
        ],
        Kind::GateResourceInterface => vec![
            target("gate_status_changed"),
            method("request_open"),
            method("request_lock"),
            method("request_unlock"),
            method("force_open"),
            method("force_close"),
            method("request_restore"),
            param("lock_on_reset", boolean(false)),
            param("is_locked", boolean(false)),
        ],
        Kind::Door => vec![
            target("started_opening"),
            target("started_closing"),
            target("finished_opening"),
            target("finished_closing"),
            target("used_locked"),
            target("used_unlocked"),
            target("used_forced_open"),
            target("used_forced_closed"),
            target("waiting_to_open"),
            target("highlight"),
            target("unhighlight"),
            input("zone_link", TypedValue::Link),
            input("character", TypedValue::Link),
            param("door_mechanism", enumeration("DOOR_MECHANISM", 0)),
            param("gate_type", enumeration("UI_KEYGATE_TYPE", 0)),
            param("has_correct_keycard", boolean(false)),
            param("cutting_tool_level", int(0)),
            param("is_open", boolean(false)),
            param("locked_text", string("")),
            param("icon_pos", vector()),
            param("icon_usable_radius", float(0.0)),
            param("show_icon_when_locked", boolean(true)),
            param("nav_mesh", enumeration("DOOR_STATE", 0)),
            internal("animation_length", float(0.0)),
            internal("resource", resource(ResourceType::AnimatedModel)),
        ],
        Kind::Keypad => vec![
            target("success"),
            target("fail"),
            target("close"),
            input("code", int(0)),
            param("location", vector()),
            param("game_over_on_fail", boolean(false)),
        ],
        Kind::AccessTerminal => vec![
            target("closed"),
            target("all_data_has_been_read"),
            target("ui_breakout_triggered"),
            param("light_on_reset", boolean(false)),
            param("folder0", string("")),
            param("folder1", string("")),
            param("location", enumeration("TERMINAL_LOCATION", 0)),
        ],
        Kind::AttachmentInterface => vec![
            input("attach", TypedValue::Link),
            param("attachment", TypedValue::Transform(Default::default())),
            param("Ignore", boolean(false)),
        ],
        Kind::ModelReference => vec![
            param("position", TypedValue::Transform(Default::default())),
            param("show_on_reset", boolean(true)),
            param("lod_ranges", TypedValue::Resource(vec![])),
            internal("resource", resource(ResourceType::RenderableInstance)),
        ],
        Kind::LightReference => vec![
            param("position", TypedValue::Transform(Default::default())),
            param("intensity_multiplier", float(1.0)),
            param("colour", vector()),
            param("radiosity_multiplier", float(1.0)),
            param("type", enumeration("LIGHT_TYPE", 0)),
            param("shadow", boolean(false)),
            internal("resource", resource(ResourceType::RenderableInstance)),
        ],
        Kind::ParticleEmitterReference => vec![
            param("position", TypedValue::Transform(Default::default())),
            param("start_on_reset", boolean(true)),
            param("show_on_reset", boolean(true)),
            internal("resource", resource(ResourceType::RenderableInstance)),
        ],
        Kind::Character => vec![
            target("finished_spawning"),
            target("finished_respawning"),
            target("dead_container_take_slot"),
            target("dead_container_emptied"),
            target("on_ragdoll_impact"),
            target("on_footstep"),
            target("on_despawn_requested"),
            param("spawn_on_reset", boolean(false)),
            param("show_on_reset", boolean(true)),
            param("contents_of_dead_container", string("")),
            param("PopToNavMesh", boolean(false)),
            param("is_cinematic", boolean(false)),
            param("disable_dead_container", boolean(false)),
            param("allow_dead_container_when_player", boolean(false)),
            param("character_class", enumeration("CHARACTER_CLASS", 0)),
            param("alliance_group", enumeration("ALLIANCE_GROUP", 0)),
            internal("resource", resource(ResourceType::AnimatedModel)),
        ],
        Kind::SoundInterface => vec![
            param("sound_event", string("")),
            param("is_occludable", boolean(true)),
            param("argument_1", string("")),
        ],
        Kind::Sound => vec![
            param("stop_event", string("")),
            param("is_static_ambience", boolean(false)),
            param("start_on", boolean(false)),
            param("multi_trigger", boolean(false)),
            param("position", TypedValue::Transform(Default::default())),
        ],
        Kind::Music => vec![
            param("music_event", string("")),
            param("smooth_rate", float(1.0)),
            param("queue_time", float(0.0)),
            param("unique_event", boolean(false)),
        ],
        Kind::CameraShake => vec![
            param("relative_transformation", TypedValue::Transform(Default::default())),
            param("impulse_intensity", float(0.0)),
            param("impulse_position", vector()),
            param("shake_type", enumeration("SHAKE_TYPE", 0)),
            param("shake_frequency", float(1.0)),
            param("max_rotation_angles", vector()),
            param("radius", float(0.0)),
            param("falloff", float(0.0)),
        ],
        Kind::CameraPath => vec![
            param("linked_splines", TypedValue::Spline(Default::default())),
            param("path_name", string("")),
            param("path_type", enumeration("CAMERA_PATH_TYPE", 0)),
            param("path_class", enumeration("CAMERA_PATH_CLASS", 0)),
            param("is_local", boolean(false)),
            param("relative_position", TypedValue::Transform(Default::default())),
            param("is_loop", boolean(false)),
            param("duration", float(0.0)),
        ],
        Kind::Zone => vec![
            target("on_loaded"),
            target("on_unloaded"),
            target("on_streaming"),
            param("composites", TypedValue::Link),
            param("suspend_on_unload", boolean(false)),
            param("space_visible", boolean(true)),
        ],
        Kind::Checkpoint => vec![
            target("on_checkpoint"),
            target("on_captured"),
            target("on_saved"),
            target("finished_saving"),
            target("finished_loading"),
            target("cancelled_saving"),
            target("finished_saving_to_hdd"),
            param("player_spawn_position", TypedValue::Transform(Default::default())),
            param("is_first_checkpoint", boolean(false)),
            param("is_first_autorun_checkpoint", boolean(false)),
            param("section", string("")),
            param("mission_number", int(0)),
            param("checkpoint_type", enumeration("CHECKPOINT_TYPE", 0)),
        ],
        Kind::GameplayTip => vec![input("string_id", string(""))],
        Kind::SetPrimaryObjective => vec![
            param("title", string("")),
            param("additional_info", string("")),
            param("title_list", enumeration("OBJECTIVE_ENTRY_ID", 0)),
            param("info_list", enumeration("OBJECTIVE_ENTRY_ID", 0)),
        ],
        Kind::PhysicsSystem => vec![
            param("system_index", int(0)),
            internal("resource", resource(ResourceType::DynamicPhysicsSystem)),
        ],
        Kind::CollisionBarrier => vec![
            target("on_damaged"),
            param("collision_type", enumeration("COLLISION_TYPE", 0)),
            param("static_collision", boolean(false)),
            internal("resource", resource(ResourceType::CollisionMapping)),
        ],
    }
}
