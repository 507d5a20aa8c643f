use dioxus::prelude::*;

use crate::timing::sleep_ms;

pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const FULL_PHRASE_PAUSE_MS: u32 = 2000;
pub const NEXT_PHRASE_DELAY_MS: u32 = 500;
pub const START_DELAY_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

/// Type/pause/delete cycle over a fixed phrase list.
///
/// Each `step` renders one frame and reports how long to wait before the
/// next one; the pause at a full phrase and the gap before the next phrase
/// are folded into those delays.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    text_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: phrases
                .iter()
                .map(|phrase| phrase.as_ref().chars().collect())
                .collect(),
            text_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    pub fn step(&mut self) -> Frame {
        let phrase = &self.phrases[self.text_index];
        let mut delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.char_index = (self.char_index + 1).min(phrase.len());
            TYPE_DELAY_MS
        };
        let text: String = phrase[..self.char_index].iter().collect();

        if !self.deleting && self.char_index == phrase.len() {
            delay_ms = FULL_PHRASE_PAUSE_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.phrases.len();
            delay_ms = NEXT_PHRASE_DELAY_MS;
        }

        Frame { text, delay_ms }
    }
}

#[component]
pub fn TypingText(phrases: Vec<&'static str>) -> Element {
    let mut text = use_signal(String::new);

    use_future(move || {
        let phrases = phrases.clone();
        async move {
            let Some(mut typewriter) = Typewriter::new(&phrases) else {
                return;
            };
            tracing::debug!(phrases = phrases.len(), "typing: start");
            sleep_ms(START_DELAY_MS).await;
            loop {
                let frame = typewriter.step();
                text.set(frame.text);
                sleep_ms(frame.delay_ms).await;
            }
        }
    });

    rsx! {
        span { id: "typing-text", class: "typing-text", "{text}" }
        span { class: "typing-cursor", "|" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frames(typewriter: &mut Typewriter, count: usize) -> Vec<(String, u32)> {
        (0..count)
            .map(|_| {
                let frame = typewriter.step();
                (frame.text, frame.delay_ms)
            })
            .collect()
    }

    #[test]
    fn types_pauses_deletes_and_advances() {
        let mut typewriter = Typewriter::new(&["ab", "c"]).expect("phrases");
        assert_eq!(
            frames(&mut typewriter, 7),
            vec![
                ("a".to_string(), 100),
                ("ab".to_string(), 2000),
                ("a".to_string(), 50),
                ("".to_string(), 500),
                ("c".to_string(), 2000),
                ("".to_string(), 500),
                ("a".to_string(), 100),
            ]
        );
    }

    #[test]
    fn wraps_back_to_the_first_phrase() {
        let mut typewriter = Typewriter::new(&["x"]).expect("phrases");
        let cycle = frames(&mut typewriter, 4);
        assert_eq!(cycle[0], cycle[2]);
        assert_eq!(cycle[1], cycle[3]);
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut typewriter = Typewriter::new(&["é✓"]).expect("phrases");
        assert_eq!(typewriter.step().text, "é");
        assert_eq!(typewriter.step().text, "é✓");
    }

    #[test]
    fn empty_list_has_no_animation() {
        assert!(Typewriter::new::<&str>(&[]).is_none());
    }
}
