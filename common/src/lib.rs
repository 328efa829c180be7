// framework-free site logic
//
// nothing in here touches the dom or the network directly: the webapp and the
// server both call into these modules, and the browser-specific pieces (local
// storage, fetch, timers) are handed in through the small traits each module
// defines.  this crate has to build for wasm32-unknown-unknown, so no tokio

pub mod anim;
pub mod contact;
pub mod error;
pub mod route;
pub mod theme;
