//! Card system: the card catalog and the shuffled supplies.
//!
//! ## Key Types
//!
//! - `Animal`, `Background`: the two faces of a card
//! - `Card`: an animal/background pair, unique within the catalog
//! - `Deck<T>`: items dealt one at a time (`CardDeck`, `RubisDeck`)
//! - `Rubis`: a reward token worth 1-4

pub mod deck;
pub mod definition;

pub use deck::{CardDeck, Deck, Rubis, RubisDeck};
pub use definition::{Animal, Background, Card};
