//! The closed enumeration of entity kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

use scriptgraph_core::{KindSelector, ShortId};

macro_rules! define_kinds {
    ($($(#[$meta:meta])* $variant:ident),+ $(,)?) => {
        /// Type tag of a script graph entity
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Kind {
            $($(#[$meta])* $variant),+
        }

        impl Kind {
            /// Every kind, in ordinal order.
            pub const ALL: &'static [Kind] = &[$(Kind::$variant),+];

            pub const COUNT: usize = Kind::ALL.len();

            /// Canonical engine name of the kind.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Kind::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

define_kinds! {
    /// Root of the hierarchy; its own parent.
    EntityMethodInterface,
    EntityInterface,
    ScriptInterface,
    /// Stands in for entities that instance a composite.
    CompositeInterface,
    /// Stands in for proxy entities.
    ProxyInterface,
    ScriptVariable,
    VariableBool,
    VariableInt,
    VariableFloat,
    VariableString,
    VariableVector,
    VariablePosition,
    VariableEnum,
    BooleanLogicInterface,
    LogicAnd,
    LogicOr,
    LogicNot,
    LogicSwitch,
    LogicDelay,
    LogicCounter,
    FloatMathInterface,
    FloatAdd,
    FloatMultiply,
    FloatClamp,
    VectorMathInterface,
    VectorAdd,
    VectorNormalise,
    TriggerSequence,
    TriggerRandom,
    TriggerSelect,
    TriggerDelay,
    SensorInterface,
    TriggerVolumeFilter,
    ProximityDetector,
    CharacterTypeMonitor,
    GateResourceInterface,
    Door,
    Keypad,
    AccessTerminal,
    AttachmentInterface,
    ModelReference,
    LightReference,
    ParticleEmitterReference,
    Character,
    SoundInterface,
    Sound,
    Music,
    CameraShake,
    CameraPath,
    Zone,
    Checkpoint,
    GameplayTip,
    SetPrimaryObjective,
    PhysicsSystem,
    CollisionBarrier,
}

impl Kind {
    /// The hierarchy root.
    pub const ROOT: Kind = Kind::EntityMethodInterface;

    /// Kind an entity resolves to when it instances a composite.
    pub const COMPOSITE_INTERFACE: Kind = Kind::CompositeInterface;

    /// Kind a proxy entity resolves to.
    pub const PROXY_INTERFACE: Kind = Kind::ProxyInterface;

    /// Dense index in `0..Kind::COUNT`.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Id of the kind as it appears in an entity's function reference.
    pub fn short_id(self) -> ShortId {
        ShortId::from_name(self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Kind> for KindSelector {
    fn from(kind: Kind) -> Self {
        KindSelector::Function(kind.short_id())
    }
}
