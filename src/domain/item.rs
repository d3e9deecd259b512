//! Abstraction over the game items flowing through a trade.

/// An item that can travel through a link trade.
///
/// The automation engine works with concrete save-data records; the
/// notification layer only needs the handful of views defined here, so
/// the dispatcher and formatter stay generic over the item type.
pub trait TradedItem: Clone + Send + Sync + 'static {
    /// Numeric species identifier; 0 means none/empty.
    fn species_id(&self) -> u16;

    /// Whether the item is an unhatched egg.
    fn is_egg(&self) -> bool;

    /// Nickname as stored on the item; may equal the species name.
    fn nickname(&self) -> &str;

    /// Human-readable species name for message text.
    fn species_name(&self) -> String;

    /// File name to attach the serialized item under.
    fn file_name(&self) -> String;

    /// Serialized save-data record for attachment delivery.
    fn to_bytes(&self) -> Vec<u8>;

    /// Plain-text set summary, suitable for pasting back into a request.
    fn export_text(&self) -> String;
}
