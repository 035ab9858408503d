use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::card::{Card, Color};
use crate::strategy::{Strategy, legal_indices};

/// Interactive strategy that queries a human on a text console.
///
/// Input and output are generic so scripted sessions can drive it; the
/// default constructor uses standard input and output.
pub struct HumanStrategy<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanStrategy<StdinLock<'static>, Stdout> {
    pub fn new(name: impl Into<String>) -> Self {
        let stdin: Stdin = io::stdin();
        Self::with_io(name, stdin.lock(), io::stdout())
    }
}

impl Default for HumanStrategy<StdinLock<'static>, Stdout> {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    pub fn with_io(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes the strategy and hands back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one trimmed line. Quitting or closing the
    /// input ends the process; a match cannot be abandoned mid-decision.
    fn prompt(&mut self, prompt: &str) -> String {
        let _ = write!(self.output, "{prompt}");
        if self.output.flush().is_err() {
            eprintln!("failed to flush output");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                let _ = writeln!(self.output, "\nInput closed. Exiting game.");
                std::process::exit(0);
            }
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                return String::new();
            }
        }
        let trimmed = line.trim().to_string();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            let _ = writeln!(self.output, "Exiting game at user's request.");
            std::process::exit(0);
        }
        trimmed
    }

    fn ask_yes_no(&mut self, question: &str) -> bool {
        loop {
            let answer = self.prompt(&format!("{question} (y/n): "));
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => {
                    let _ = writeln!(self.output, "Please answer 'y' or 'n'.");
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    fn choose_card_index(
        &mut self,
        hand: &[Card],
        top: &Card,
        declared_color: Option<Color>,
    ) -> Option<usize> {
        let legal = legal_indices(hand, top, declared_color);
        let _ = writeln!(self.output, "\n=== {}'s turn ===", self.name);
        let _ = writeln!(self.output, "Top card: {top}");
        if let Some(color) = declared_color {
            let _ = writeln!(self.output, "Declared color: {color}");
        }
        let _ = writeln!(self.output, "Your cards:");
        for (index, card) in hand.iter().enumerate() {
            let mark = if legal.contains(&index) { '✓' } else { '✗' };
            let _ = writeln!(self.output, "  [{}] {card} {mark}", index + 1);
        }
        if legal.is_empty() {
            let _ = writeln!(self.output, "No playable card. You have to draw.");
            return None;
        }
        loop {
            let input = self.prompt("Choose a card number, or 0 to draw: ");
            if input.eq_ignore_ascii_case("help") {
                let _ = writeln!(
                    self.output,
                    "Enter the number shown next to a card marked ✓, or 0 to draw a card."
                );
                continue;
            }
            let Ok(choice) = input.parse::<usize>() else {
                let _ = writeln!(self.output, "Invalid input: '{input}'. Please enter a number.");
                continue;
            };
            if choice == 0 {
                return None;
            }
            let index = choice - 1;
            if legal.contains(&index) {
                return Some(index);
            }
            if index < hand.len() {
                let _ = writeln!(self.output, "{} cannot be played right now.", hand[index]);
            } else {
                let _ = writeln!(self.output, "Card number out of range.");
            }
        }
    }

    fn choose_color(&mut self, _hand: &[Card]) -> Color {
        let _ = writeln!(self.output, "\nChoose a color:");
        for (index, color) in Color::ALL.iter().enumerate() {
            let _ = writeln!(self.output, "  [{}] {color}", index + 1);
        }
        loop {
            let input = self.prompt("Color (1-4): ");
            match input.parse::<usize>() {
                Ok(choice) if (1..=Color::ALL.len()).contains(&choice) => {
                    return Color::ALL[choice - 1];
                }
                _ => {
                    let _ = writeln!(self.output, "Invalid input: '{input}'.");
                }
            }
        }
    }

    fn confirm_play_drawn_card(&mut self, card: &Card) -> bool {
        self.ask_yes_no(&format!("You drew {card}. Play it now?"))
    }

    fn confirm_call_last_card(&mut self) -> bool {
        self.ask_yes_no("Call last card?")
    }
}
