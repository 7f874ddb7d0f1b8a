//! Scoreboard header

use trellis::prelude::*;

#[derive(Clone)]
pub struct HeaderProps {
    pub title: String,
    pub total_players: usize,
}

/// Pure display of the title and player count. The count is derived
/// by the owner at view time, never stored here.
pub struct Header;

impl Component for Header {
    type Props = HeaderProps;
    type Message = ();

    fn create(_props: &HeaderProps) -> Self {
        Self
    }

    fn update(&mut self, _message: ()) {}

    fn view(&self, props: &HeaderProps, _link: &Link<Self>) -> Node {
        Node::section(
            "header",
            vec![
                Node::text(props.title.clone()),
                Node::text(format!("Players: {}", props.total_players)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displays_title_and_count_verbatim() {
        let runtime = Runtime::mount::<Header>(HeaderProps {
            title: "Scoreboard".to_string(),
            total_players: 4,
        });
        assert_eq!(runtime.rendered().texts(), vec!["Scoreboard", "Players: 4"]);
    }
}
