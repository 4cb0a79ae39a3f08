// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// Library entry exposing generator modules.
pub mod error;
pub mod families;
pub mod generator;
pub mod render;
pub mod schema;
pub mod table;
