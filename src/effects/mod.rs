//! Expert-rule effects.
//!
//! Revealed cards trigger the ability of their animal:
//! - `Ability`: The five abilities, one per animal
//! - `ExpertEffect`: Turn-order signal handed back to the turn loop
//! - `PositionSource`: How an ability asks the player for a target
//! - `EffectResolver`: Applies an ability to the game state
//!
//! ## Design Philosophy
//!
//! Abilities are a closed set dispatched by `match`, not trait objects.
//! Bad targets never raise errors: the ability simply has no effect and
//! the resolver reports why.

mod effect;
mod resolver;
mod targeting;

pub use effect::{Ability, ExpertEffect};
pub use resolver::{EffectResolver, Resolution, ResolveResult};
pub use targeting::{is_adjacent, InputError, PositionSource, Prompt};
