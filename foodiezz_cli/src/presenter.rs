//! Paged console output with a "press enter" pause between pages.

use std::future::Future;
use std::io::{self, Write};

use foodiezz_lib::{Pages, ResultAggregator};
use tokio::sync::mpsc;

use crate::output::render_page;

pub const NOTHING_OPEN: &str = "Uh-oh! Looks like no Food Truck is open right now!";

/// Asks the reader whether to show the next page.
pub trait Prompt {
    /// Blocks until the reader answers. `shown` is the number of rows
    /// displayed so far. `Ok(false)` stops paging.
    fn wait_for_more(&mut self, shown: usize) -> impl Future<Output = io::Result<bool>>;
}

/// Reads answers from standard input.
///
/// Lines come from a plain reader thread over a channel. A read from stdin
/// cannot be cancelled, and keeping it off the runtime means Ctrl-C during
/// the prompt does not leave shutdown waiting on it.
pub struct StdinPrompt {
    lines: mpsc::UnboundedReceiver<io::Result<String>>,
}

impl StdinPrompt {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || {
            for line in io::stdin().lines() {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines: rx }
    }
}

impl Prompt for StdinPrompt {
    async fn wait_for_more(&mut self, shown: usize) -> io::Result<bool> {
        let mut stdout = io::stdout();
        write!(
            stdout,
            "Showing {} results. Press enter to view more...",
            shown
        )?;
        stdout.flush()?;
        match self.lines.recv().await {
            Some(Ok(_)) => {
                // erase the prompt line before the next page
                write!(stdout, "\x1b[A\x1b[2K")?;
                Ok(true)
            }
            Some(Err(e)) => Err(e),
            None => {
                writeln!(stdout)?;
                Ok(false)
            }
        }
    }
}

/// Writes `results` to `out` in pages of `page_size`, pausing on `prompt`
/// between pages but never after the last one. Returns the rows shown.
pub async fn present<P, W>(
    results: &ResultAggregator,
    page_size: usize,
    prompt: &mut P,
    out: &mut W,
) -> io::Result<usize>
where
    P: Prompt,
    W: Write,
{
    let total = results.len();
    if total == 0 {
        writeln!(out, "\n{}", NOTHING_OPEN)?;
        return Ok(0);
    }

    let widths = results.column_widths();
    writeln!(out, "\nFound these Food Trucks that are open now:")?;
    let mut shown = 0;
    for page in Pages::new(total, page_size) {
        let rows = results.page(page.start, page.len);
        writeln!(out, "{}", render_page(&rows, widths, page.start == 0))?;
        out.flush()?;
        shown += page.len;
        if page.has_more && !prompt.wait_for_more(shown).await? {
            writeln!(out, "\nShowed {} of {} food trucks.", shown, total)?;
            return Ok(shown);
        }
    }
    writeln!(out, "\n====No more Food Trucks found====")?;
    writeln!(out, "Found {} food trucks open now.", total)?;
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use foodiezz_lib::types::FoodTruck;

    use super::*;

    /// Answers from a script and records every prompt.
    struct ScriptedPrompt {
        answers: Vec<bool>,
        asked: Vec<usize>,
    }

    impl ScriptedPrompt {
        fn always() -> Self {
            Self {
                answers: Vec::new(),
                asked: Vec::new(),
            }
        }

        fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().rev().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        async fn wait_for_more(&mut self, shown: usize) -> io::Result<bool> {
            self.asked.push(shown);
            Ok(self.answers.pop().unwrap_or(true))
        }
    }

    fn results(n: usize) -> ResultAggregator {
        let mut agg = ResultAggregator::new();
        agg.ingest((0..n).map(|i| {
            FoodTruck::new(
                &format!("Truck {:02}", i),
                &format!("{} Main St", i),
                "10:00",
                "20:00",
                3,
                "Wednesday",
            )
        }));
        agg
    }

    async fn run(n: usize, page_size: usize, prompt: &mut ScriptedPrompt) -> (usize, String) {
        let mut out = Vec::new();
        let shown = present(&results(n), page_size, prompt, &mut out).await.unwrap();
        (shown, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn no_results_prints_message_only() {
        let mut prompt = ScriptedPrompt::always();
        let (shown, out) = run(0, 10, &mut prompt).await;
        assert_eq!(shown, 0);
        assert_eq!(out.trim(), NOTHING_OPEN);
        assert!(prompt.asked.is_empty());
    }

    #[tokio::test]
    async fn prompts_between_pages_only() {
        let mut prompt = ScriptedPrompt::always();
        let (shown, out) = run(25, 10, &mut prompt).await;
        assert_eq!(shown, 25);
        assert_eq!(prompt.asked, vec![10, 20]);
        assert!(out.contains("Found 25 food trucks open now."));
    }

    #[tokio::test]
    async fn single_page_never_prompts() {
        let mut prompt = ScriptedPrompt::always();
        let (shown, _) = run(10, 10, &mut prompt).await;
        assert_eq!(shown, 10);
        assert!(prompt.asked.is_empty());
    }

    #[tokio::test]
    async fn every_row_printed_once_in_order() {
        let mut prompt = ScriptedPrompt::always();
        let (_, out) = run(7, 3, &mut prompt).await;
        let positions: Vec<usize> = (0..7)
            .map(|i| {
                let name = format!("Truck {:02}", i);
                assert_eq!(out.matches(&name).count(), 1, "{name} printed once");
                out.find(&name).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(prompt.asked, vec![3, 6]);
    }

    #[tokio::test]
    async fn header_is_printed_once() {
        let mut prompt = ScriptedPrompt::always();
        let (_, out) = run(25, 10, &mut prompt).await;
        assert_eq!(out.matches("Name").count(), 1);
        assert_eq!(out.matches("Address").count(), 1);
    }

    #[tokio::test]
    async fn declining_stops_paging() {
        let mut prompt = ScriptedPrompt::answering(&[false]);
        let (shown, out) = run(25, 10, &mut prompt).await;
        assert_eq!(shown, 10);
        assert_eq!(prompt.asked, vec![10]);
        assert!(!out.contains("Truck 10"));
        assert!(out.contains("Showed 10 of 25 food trucks."));
    }
}
