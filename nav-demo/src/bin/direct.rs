//! Direct variant: no registry, the window rebuilds pages on every
//! navigation.

use nav_demo::direct::DirectWindow;
use nav_demo::logging;
use rat_nav::Application;

fn main() -> anyhow::Result<()> {
    logging::init("nav-demo-direct.log")?;

    let app = Application::new();
    app.run(|_cx| Ok(DirectWindow::new()))
}
