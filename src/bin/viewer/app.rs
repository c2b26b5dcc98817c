use macroquad::prelude::*;
use parabolic_arc::core::window::ScreenRect;
use parabolic_arc::demo;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN,
    MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::render::{draw_grid, draw_scene, draw_title};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Parabolic Arc".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::warn!(path = UI_FONT_PATH, error = %err, "falling back to default font");
            None
        }
    };

    // The scene never changes; build it once and redraw it every frame.
    let scene = demo::demo_scene();
    for arc in demo::launches() {
        tracing::info!(
            angle_deg = arc.angle_deg(),
            velocity = arc.velocity(),
            range = arc.range(),
            apex = arc.apex_height(),
            "launch"
        );
    }

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let rect = ScreenRect {
            left: LEFT_MARGIN,
            right: screen_width() - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_height() - BOTTOM_MARGIN,
        };

        clear_background(BACKGROUND);
        draw_title(&scene, rect, ui_font.as_ref());
        draw_grid(&scene, rect, ui_font.as_ref());
        draw_scene(&scene, rect);

        next_frame().await;
    }
}
