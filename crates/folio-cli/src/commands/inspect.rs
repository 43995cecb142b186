use anyhow::{bail, Result};

use folio_core::content::{Portfolio, Section};
use folio_core::{AppConfig, CarouselController};

/// Print the carousel state a viewport of `width` px would see, then step
/// forward `steps` times
pub fn run(config: &AppConfig, portfolio: &Portfolio, section: &str, width: u32, steps: usize) -> Result<()> {
    let section: Section = section.parse()?;
    let Some(total) = portfolio.item_count(section) else {
        bail!("'{}' is not a carousel section", section.title());
    };

    let mut controller = CarouselController::with_breakpoints(total, width, config.carousel);

    println!(
        "{}: {} items at {}px -> {} per view, max index {}, {} indicators\n",
        section.title(),
        total,
        width,
        controller.items_per_view(),
        controller.max_index(),
        controller.page_indicator_count()
    );

    print_state(0, &controller, portfolio, section);
    for step in 1..=steps {
        controller.go_next();
        print_state(step, &controller, portfolio, section);
    }

    Ok(())
}

fn print_state(step: usize, controller: &CarouselController, portfolio: &Portfolio, section: Section) {
    let visible: Vec<&str> = controller
        .visible_range()
        .filter_map(|i| portfolio.title_at(section, i))
        .collect();

    println!(
        "  step {:>2}: index {} offset {:>7.3}% prev:{} next:{}  [{}]",
        step,
        controller.current_index(),
        controller.visible_offset_percent(),
        if controller.can_go_previous() { "y" } else { "n" },
        if controller.can_go_next() { "y" } else { "n" },
        visible.join(" | ")
    );
}
