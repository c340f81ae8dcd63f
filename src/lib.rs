// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// Library entry exposing parser modules.
pub mod assembler;
pub mod core;
pub mod output;
