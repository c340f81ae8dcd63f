// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for ippforge.

fn main() {
    let use_color = std::env::var("NO_COLOR").is_err();
    let status = match ippforge::assembler::run() {
        Ok(outcome) => outcome.exit_status(),
        Err(err) => {
            eprintln!("{}", err.format_with_context(use_color));
            err.exit_status()
        }
    };
    std::process::exit(status.code());
}
