//! Per-row score counter

use trellis::prelude::*;

/// Owns one score, local to the row it is rendered under. Nothing
/// outside this subtree can read or write it.
pub struct Counter {
    score: i32,
}

pub enum CounterMsg {
    Increment,
    Decrement,
}

impl Component for Counter {
    type Props = ();
    type Message = CounterMsg;

    fn create(_props: &()) -> Self {
        Self { score: 0 }
    }

    fn update(&mut self, message: CounterMsg) {
        match message {
            CounterMsg::Increment => self.score += 1,
            CounterMsg::Decrement => self.score -= 1,
        }
    }

    fn view(&self, _props: &(), link: &Link<Self>) -> Node {
        Node::section(
            "counter",
            vec![
                Node::trigger("-", link.callback(|()| CounterMsg::Decrement)),
                Node::text(self.score.to_string()),
                Node::trigger("+", link.callback(|()| CounterMsg::Increment)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_starts_at_zero() {
        let runtime = Runtime::mount::<Counter>(());
        assert_eq!(runtime.rendered().texts(), vec!["0"]);
    }

    #[test]
    fn test_requests_fold_in_order_within_one_flush() {
        let mut runtime = Runtime::mount::<Counter>(());
        let ui = runtime.rendered();
        let increment = ui.trigger("+").unwrap();
        let decrement = ui.trigger("-").unwrap();

        // k increments and j decrements queued before a single flush
        // must land as k - j.
        increment.emit(());
        increment.emit(());
        decrement.emit(());
        increment.emit(());
        runtime.flush();

        assert_eq!(runtime.rendered().texts(), vec!["2"]);
    }

    #[test]
    fn test_negative_scores_are_preserved() {
        let mut runtime = Runtime::mount::<Counter>(());

        let decrement = runtime.rendered().trigger("-").unwrap();
        decrement.emit(());
        runtime.flush();
        decrement.emit(());
        runtime.flush();

        assert_eq!(runtime.rendered().texts(), vec!["-2"]);
    }
}
