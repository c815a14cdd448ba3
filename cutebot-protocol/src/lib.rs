//! Cutebot Pro I2C Command Protocol
//!
//! This crate defines the command frames the host writes to the robot's
//! onboard controller at I2C address `0x10`. The protocol is write-mostly:
//! the host sends a frame, and for the few commands that produce data it
//! follows up with a single-byte read.
//!
//! # Protocol Overview
//!
//! All commands use the same binary frame format:
//! ```text
//! ┌──────┬──────┬────────┬───────┬─────────────┐
//! │ 0xFF │ 0xF9 │ OPCODE │ COUNT │ PARAMS      │
//! │ 1B   │ 1B   │ 1B     │ 1B    │ COUNT bytes │
//! └──────┴──────┴────────┴───────┴─────────────┘
//! ```
//!
//! There is no checksum and no response framing. Replies are a bare
//! unsigned byte read after the request frame.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod commands;
pub mod frame;

pub use commands::Command;
pub use frame::{CommandFrame, FrameError, FRAME_HEADER, MAX_FRAME_SIZE, MAX_PARAMS};
