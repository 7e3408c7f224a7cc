//! Registry variant: view-models, views and the navigator are singletons
//! assembled once, then threaded through constructors.

use nav_demo::logging;
use nav_demo::registry::Registry;
use nav_demo::shell::{MainViewModel, MainWindow};
use rat_nav::Application;

fn main() -> anyhow::Result<()> {
    logging::init("nav-demo.log")?;

    let app = Application::new();
    app.run(|_cx| {
        let Registry { navigator, views } = Registry::build()?;
        let vm = MainViewModel::new(navigator)?;
        Ok(MainWindow::new(vm, views))
    })
}
