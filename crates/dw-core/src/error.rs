use crate::entity::EntityId;
use crate::room::RoomId;

/// Alias for `Result<T, DwError>`.
pub type DwResult<T> = Result<T, DwError>;

/// Contract violations raised by the world model.
///
/// Absence is never an error here: lookups of missing cells, edges, rooms or
/// ids return `None`/`false`. These variants indicate a caller mistake.
#[derive(Debug, thiserror::Error)]
pub enum DwError {
    /// A coordinate was not an integer or lies outside the addressable grid.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A direction name could not be parsed.
    #[error("invalid direction: \"{0}\" (expected north, south, east or west)")]
    InvalidDirection(String),

    /// A color string was not of the form `#rrggbb`.
    #[error("invalid color: \"{0}\" (expected #rrggbb)")]
    InvalidColor(String),

    /// A fixed item was declared with a zero width or depth.
    #[error("item \"{name}\" has invalid footprint {width}x{depth}")]
    InvalidFootprint {
        /// Name of the offending item.
        name: String,
        /// Declared width in cells.
        width: u32,
        /// Declared depth in cells.
        depth: u32,
    },

    /// An entity was handed to a slot that stores a different kind.
    #[error("entity {id} is a {found}, expected {expected}")]
    KindMismatch {
        /// The id of the entity.
        id: EntityId,
        /// The kind the slot accepts.
        expected: &'static str,
        /// The kind that was supplied.
        found: &'static str,
    },

    /// The entity kind has no slot in the spatial store.
    #[error("a {0} cannot be placed on the grid; spawn it instead")]
    NotPlaceable(&'static str),

    /// The entity kind belongs on the grid and cannot be spawned.
    #[error("a {0} must be placed on the grid, not spawned")]
    NotAnActor(&'static str),

    /// An in-place edit tried to move an entity to another key.
    #[error("entity {0} cannot change its key in place")]
    KeyChanged(EntityId),

    /// Attempted to restore an id that is still live in the registry.
    #[error("entity id {0} is already live")]
    IdInUse(EntityId),

    /// A room with the same id or number already exists.
    #[error("room already exists: {0}")]
    DuplicateRoom(String),

    /// The referenced room does not exist.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A snapshot was written by an incompatible format version.
    #[error("unsupported snapshot format version {found} (expected {expected})")]
    UnsupportedFormat {
        /// The version found in the snapshot.
        found: u32,
        /// The version this build reads.
        expected: u32,
    },

    /// The snapshot JSON could not be parsed or produced.
    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
