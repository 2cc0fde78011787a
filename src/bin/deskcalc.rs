//! Terminal front end for the deskcalc engine.
//!
//! Every line read from stdin is split on whitespace. A word naming a button
//! (`sin`, `x^2`, `AC`, ...) presses it, any other word is typed key by key.
//! The display is printed after each line.

use deskcalc::{classify, label_for_key, Calculator, Effect, Key, Label};
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Turn a word of input into the buttons it stands for
fn labels(word: &str) -> Vec<Label> {
    if let Ok(label) = classify(word) {
        return vec![label];
    }
    word.chars()
        .filter_map(|c| {
            let label = label_for_key(Key::Char(c));
            if label.is_none() {
                debug!("no button for key '{}'", c);
            }
            label
        })
        .collect()
}

/// What to tell the user once `text` is handed to the clipboard
fn copy_notice(text: &str) -> String {
    format!("Content copied to clipboard.\n{}", text)
}

fn main() -> io::Result<()> {
    env_logger::init();
    info!("deskcalc ready");

    let mut calculator = Calculator::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", calculator.display())?;

    for line in stdin.lock().lines() {
        let line = line?;
        for word in line.split_whitespace() {
            for label in labels(word) {
                if let Some(Effect::Copy(text)) = calculator.press_label(label) {
                    eprintln!("{}", copy_notice(&text));
                }
            }
        }
        writeln!(out, "{}", calculator.display())?;
        out.flush()?;
    }
    Ok(())
}
