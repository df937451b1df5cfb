use std::collections::HashMap;

use simplelog::*;

use drumsheet::{
    compile_with_config, EventSink, GenerationConfig, RhythmPattern, TrackSink, VariantGenerator,
    VariantKind,
};

fn main() -> anyhow::Result<()> {
    // init logging
    TermLogger::init(
        log::STATIC_MAX_LEVEL,
        ConfigBuilder::default().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| {
        log::error!("init_logger error: {:?}", err);
    });

    // a General MIDI percussion map for the kit voices
    let pitch_map = HashMap::from([
        ("bass".to_string(), 36),
        ("snare".to_string(), 38),
        ("closed_hihat".to_string(), 42),
        ("open_hihat".to_string(), 46),
        ("ride".to_string(), 51),
        ("crash".to_string(), 49),
        ("t1".to_string(), 48),
        ("t2".to_string(), 47),
        ("t3".to_string(), 45),
    ]);

    let config = GenerationConfig::default();
    let pattern_name = "standard_rock";
    let pattern = RhythmPattern::from_name(pattern_name)
        .ok_or_else(|| anyhow::anyhow!("unknown pattern '{}'", pattern_name))?;

    println!(
        "Rendering '{}' and its variants: {} bpm, {}/{}, {} bars",
        pattern_name, config.bpm, config.numerator, config.denominator, config.bars
    );

    // seeded, so each run prints the same variants
    let mut generator = VariantGenerator::new(Some(42));
    for kind in [
        VariantKind::Identity,
        VariantKind::Snare,
        VariantKind::Bass,
        VariantKind::Random,
        VariantKind::All,
    ] {
        let variant = generator.create_variant(&pattern, kind);
        let timeline = compile_with_config(&variant, &config)?;

        // a sink would serialize this as e.g. `standard_rock_snare.mid`
        let mut sink = TrackSink::new(pitch_map.clone());
        for event in &timeline {
            sink.append(&event.drums, event.duration, event.offset, event.velocity);
        }

        println!("\n{}_{} ({} notes):", pattern_name, kind, sink.events().len());
        for event in timeline.iter().take(8) {
            println!("  {}", event);
        }
        if timeline.len() > 8 {
            println!("  ... {} more", timeline.len() - 8);
        }
    }

    Ok(())
}
