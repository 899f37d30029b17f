// Business logic services layer
//
// This module contains the pure pairing logic, decoupled from file IO
// and console output so it can be reused by every command.

pub mod matching;
