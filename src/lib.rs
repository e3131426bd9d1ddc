// Library root
// -----------
// This crate exposes the pieces of the users console. The binary
// (`main.rs`) wires them to stdin/stdout.
//
// Module responsibilities:
// - `api`: configuration and the blocking HTTP fetch of the user list.
// - `error`: the `LoadError` kinds reported by a failed load.
// - `users`: the `User` record and lenient JSON decoding.
// - `table`: fixed-width rendering of users.
// - `output`: the single lock every console write goes through.
// - `state`: the `running` and shake flags shared with the reporters.
// - `reporters`: the clock and shake background loops.
// - `console`: the controller and its command loop.
pub mod api;
pub mod console;
pub mod error;
pub mod output;
pub mod reporters;
pub mod state;
pub mod table;
pub mod users;
