//! Counter example - demonstrates owner-held state and deferred updates

use trellis::prelude::*;

struct Clicker {
    count: i32,
}

enum ClickerMsg {
    Step(i32),
}

impl Component for Clicker {
    type Props = i32;
    type Message = ClickerMsg;

    fn create(start: &i32) -> Self {
        Self { count: *start }
    }

    fn update(&mut self, message: ClickerMsg) {
        match message {
            ClickerMsg::Step(delta) => self.count += delta,
        }
    }

    fn view(&self, _props: &i32, link: &Link<Self>) -> Node {
        Node::section(
            "clicker",
            vec![
                Node::trigger("down", link.callback(|()| ClickerMsg::Step(-1))),
                Node::text(format!("count: {}", self.count)),
                Node::trigger("up", link.callback(|()| ClickerMsg::Step(1))),
            ],
        )
    }
}

fn main() {
    let mut runtime = Runtime::mount::<Clicker>(10);

    // Requests queue up; the fold happens at flush time, so all three
    // land even though they were made against the same rendered view.
    let up = runtime.rendered().trigger("up").expect("clicker renders an up trigger");
    up.emit(());
    up.emit(());
    up.emit(());
    runtime.flush();

    let down = runtime.rendered().trigger("down").expect("clicker renders a down trigger");
    down.emit(());
    runtime.flush();

    for line in runtime.rendered().texts() {
        println!("{line}");
    }
}
