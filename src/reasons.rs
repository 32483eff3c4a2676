use kube::runtime::events::EventType;

pub static DEFAULT_COMPONENT: &str = "castai-node-rotator";

pub const NODE_ROTATION_STARTED: &str = "NodeRotationStarted";
pub const REPLACEMENT_NODE_REQUESTED: &str = "ReplacementNodeRequested";
pub const REPLACEMENT_NODE_READY: &str = "ReplacementNodeReady";
pub const REPLACEMENT_NODE_FAILED: &str = "ReplacementNodeFailed";
pub const NODE_CORDONED: &str = "NodeCordoned";
pub const NODE_UNCORDONED: &str = "NodeUncordoned";
pub const NODE_DRAINED: &str = "NodeDrained";
pub const NODE_DRAIN_TIMED_OUT: &str = "NodeDrainTimedOut";
/// Pod still on a node whose drain timed out
pub const POD_NOT_DRAINED: &str = "PodNotDrained";
pub const NODE_LABELED: &str = "NodeLabeled";
pub const NODE_DELETED: &str = "NodeDeleted";
pub const NODE_ROTATION_COMPLETED: &str = "NodeRotationCompleted";
pub const NODE_ROTATION_FAILED: &str = "NodeRotationFailed";
/// e.g. the node runs the rotation job itself
pub const NODE_ROTATION_SKIPPED: &str = "NodeRotationSkipped";

pub const ALL: [&str; 14] = [
    NODE_ROTATION_STARTED,
    REPLACEMENT_NODE_REQUESTED,
    REPLACEMENT_NODE_READY,
    REPLACEMENT_NODE_FAILED,
    NODE_CORDONED,
    NODE_UNCORDONED,
    NODE_DRAINED,
    NODE_DRAIN_TIMED_OUT,
    POD_NOT_DRAINED,
    NODE_LABELED,
    NODE_DELETED,
    NODE_ROTATION_COMPLETED,
    NODE_ROTATION_FAILED,
    NODE_ROTATION_SKIPPED,
];

pub const ACTION_UPDATE: &str = "Update";
pub const ACTION_CREATE: &str = "Create";
pub const ACTION_CORDON: &str = "Cordon";
pub const ACTION_UNCORDON: &str = "Uncordon";
pub const ACTION_DRAIN: &str = "Drain";
pub const ACTION_LABEL: &str = "Label";
pub const ACTION_DELETE: &str = "Delete";

/// Event type a reason is normally reported with. Unknown reasons are Normal.
pub fn default_type(reason: &str) -> EventType {
    match reason {
        REPLACEMENT_NODE_FAILED | NODE_DRAIN_TIMED_OUT | POD_NOT_DRAINED | NODE_ROTATION_FAILED => {
            EventType::Warning
        }
        _ => EventType::Normal,
    }
}
