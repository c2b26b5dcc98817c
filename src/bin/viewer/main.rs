use macroquad::prelude::Conf;

mod app;
mod constants;
mod render;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    parabolic_arc::logging::init_tracing();
    app::run().await;
}
