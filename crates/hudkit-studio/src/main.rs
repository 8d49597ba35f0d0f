mod host;

use anyhow::{Context, Result};
use hudkit_engine::logging::{LoggingConfig, init_logging};
use hudkit_engine::scene::DrawCmd;
use hudkit_ui::prelude::*;

use host::{PreviewHost, PreviewTextures};

const FRAME_POS: Vec2 = Vec2::new(400.0, 600.0);
const FRAME_SIZE: Vec2 = Vec2::new(260.0, 64.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DrawConfig::default();
    let hp_color = PaletteColor::from_base(Color::from_hex("#3cb44bff").context("hp color")?);
    let shield_color = PaletteColor::from_base(Color::from_hex("#ffe119c0").context("shield color")?);

    let textures = PreviewTextures::default()
        .with_icon(10_001, 40, 40)
        .with_icon(215_004, 24, 32)
        .with_bar("smooth", 64, 16);

    // A chat window covering the lower-left corner of the unit frame.
    let mut clips = ClipRects::new(WindowClippingMode::Clip);
    clips.set_rects([Rect::new(300.0, 640.0, 180.0, 200.0)]);

    let mut host = PreviewHost { mouse: Vec2::new(10.0, 10.0), ..PreviewHost::default() };

    let hp = 0.72;
    let shield = 0.4;
    let outcome = draw_in_window_default(&mut host, &clips, &true, "player_frame", FRAME_POS, FRAME_SIZE, |surface| {
        let mut p = Painter::new(surface, &config, &textures);

        let bar_size = Vec2::new(FRAME_SIZE.x, 24.0);
        p.gradient_rect(FRAME_POS, bar_size, &PaletteColor::solid(Color::from_rgba_u8(20, 20, 20, 200)));
        p.bar_texture(FRAME_POS, Vec2::new(bar_size.x * hp, bar_size.y), &hp_color, Some("smooth"), BarTextureDrawMode::RepeatHorizontal);
        p.shield(shield, hp, FRAME_POS, bar_size, ShieldHeight::Percent(25.0), &shield_color);
        p.outlined_text("Lv90  Player One", FRAME_POS + Vec2::new(4.0, 4.0));

        let icon_pos = FRAME_POS + Vec2::new(0.0, 28.0);
        p.icon(IconSource::Action(10_001), icon_pos, Vec2::splat(32.0), true, false);
        p.icon_cooldown(icon_pos, Vec2::splat(32.0), 12.5, 30.0);
        p.icon(IconSource::Status { id: 215_002, stack_count: 3 }, icon_pos + Vec2::new(40.0, 0.0), Vec2::new(24.0, 32.0), false, true);
        p.shadow_text("12s", icon_pos + Vec2::new(44.0, 10.0));
    });

    println!();
    println!("  hudkit studio: headless frame preview");
    println!("  routing: {outcome:?}");
    println!();

    for window in &host.windows {
        println!("  window {:<16} flags {:?}", window.name, window.flags);
        for item in window.list.items() {
            println!("    {:<14} clip {:?}", describe(&item.cmd), item.clip_rect);
        }
    }
    if !host.canvas.is_empty() {
        println!("  canvas: {} commands", host.canvas.len());
    }

    let total: usize = host.windows.iter().map(|w| w.list.len()).sum::<usize>() + host.canvas.len();
    log::info!("recorded {total} draw commands across {} windows", host.windows.len());
    Ok(())
}

fn describe(cmd: &DrawCmd) -> &'static str {
    match cmd {
        DrawCmd::RectMultiColor { .. } => "rect",
        DrawCmd::RectStroke { .. } => "stroke",
        DrawCmd::Image { .. } => "image",
        DrawCmd::Text { .. } => "text",
        DrawCmd::Triangle { .. } => "triangle",
    }
}
