//! Bundled parent-of-kind table.
//!
//! Data, not logic: entries are kept exactly as shipped even where a mapping
//! looks odd, since graphs written by the engine depend on them.

use crate::kind::Kind;
use Kind::*;

pub(crate) static BUNDLED_PARENTS: &[(Kind, Kind)] = &[
    (EntityMethodInterface, EntityMethodInterface),
    (EntityInterface, EntityMethodInterface),
    (ScriptInterface, EntityInterface),
    (CompositeInterface, ScriptInterface),
    (ProxyInterface, EntityInterface),
    (ScriptVariable, ScriptInterface),
    (VariableBool, ScriptVariable),
    (VariableInt, ScriptVariable),
    (VariableFloat, ScriptVariable),
    (VariableString, ScriptVariable),
    (VariableVector, ScriptVariable),
    (VariablePosition, ScriptVariable),
    (VariableEnum, ScriptVariable),
    (BooleanLogicInterface, ScriptInterface),
    (LogicAnd, BooleanLogicInterface),
    (LogicOr, BooleanLogicInterface),
    (LogicNot, BooleanLogicInterface),
    (LogicSwitch, ScriptInterface),
    (LogicDelay, ScriptInterface),
    (LogicCounter, ScriptInterface),
    (FloatMathInterface, ScriptInterface),
    (FloatAdd, FloatMathInterface),
    (FloatMultiply, FloatMathInterface),
    (FloatClamp, FloatMathInterface),
    (VectorMathInterface, ScriptInterface),
    (VectorAdd, VectorMathInterface),
    (VectorNormalise, VectorMathInterface),
    (TriggerSequence, ScriptInterface),
    (TriggerRandom, ScriptInterface),
    (TriggerSelect, ScriptInterface),
    (TriggerDelay, ScriptInterface),
    (SensorInterface, ScriptInterface),
    (TriggerVolumeFilter, SensorInterface),
    (ProximityDetector, SensorInterface),
    // Best guess: not confirmed against engine data.
    (CharacterTypeMonitor, ScriptInterface),
    (GateResourceInterface, ScriptInterface),
    (Door, GateResourceInterface),
    // Best guess: not confirmed against engine data.
    (Keypad, GateResourceInterface),
    (AccessTerminal, ScriptInterface),
    (AttachmentInterface, ScriptInterface),
    (ModelReference, AttachmentInterface),
    (LightReference, AttachmentInterface),
    (ParticleEmitterReference, AttachmentInterface),
    (Character, AttachmentInterface),
    (SoundInterface, ScriptInterface),
    (Sound, SoundInterface),
    (Music, SoundInterface),
    (CameraShake, ScriptInterface),
    (CameraPath, ScriptInterface),
    (Zone, ScriptInterface),
    (Checkpoint, ScriptInterface),
    (GameplayTip, ScriptInterface),
    // Best guess: not confirmed against engine data.
    (SetPrimaryObjective, GameplayTip),
    (PhysicsSystem, ScriptInterface),
    (CollisionBarrier, ScriptInterface),
];
