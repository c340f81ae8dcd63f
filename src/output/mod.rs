// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Output adapters for validated programs.

pub mod xml;

pub use xml::XmlWriter;
