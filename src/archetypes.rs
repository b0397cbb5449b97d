use crate::cycle::CycleDay;

/// Daily content shown for a cycle day: archetype name, symbol, message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub name: &'static str,
    pub symbol: &'static str,
    pub message: &'static str,
}

/// One archetype per cycle day, four weeks of seven.
///
/// Week themes: rest (1–7), rising energy (8–14), full expression (15–21),
/// release (22–28).
const ARCHETYPES: [Archetype; 28] = [
    Archetype { name: "The Seed", symbol: "🌱", message: "Begin quietly. Everything is potential." },
    Archetype { name: "The Root", symbol: "🪴", message: "Ground yourself before reaching out." },
    Archetype { name: "The Well", symbol: "💧", message: "Draw from stillness today." },
    Archetype { name: "The Cave", symbol: "🕳️", message: "Retreat is not surrender." },
    Archetype { name: "The Ember", symbol: "🪵", message: "Keep the small fire fed." },
    Archetype { name: "The Listener", symbol: "👂", message: "Let the body speak first." },
    Archetype { name: "The Threshold", symbol: "🚪", message: "Rest ends; something stirs." },
    Archetype { name: "The Spark", symbol: "✨", message: "Energy returns. Follow curiosity." },
    Archetype { name: "The Archer", symbol: "🏹", message: "Pick one target and aim." },
    Archetype { name: "The Builder", symbol: "🧱", message: "Stack one brick at a time." },
    Archetype { name: "The River", symbol: "🌊", message: "Momentum carries; steer, don't paddle." },
    Archetype { name: "The Weaver", symbol: "🧵", message: "Connect the loose threads." },
    Archetype { name: "The Climber", symbol: "⛰️", message: "The slope is steepest near the top." },
    Archetype { name: "The Herald", symbol: "📯", message: "Say out loud what you are making." },
    Archetype { name: "The Sun", symbol: "☀️", message: "Full expression. Hold nothing back." },
    Archetype { name: "The Dancer", symbol: "💃", message: "Move for the joy of moving." },
    Archetype { name: "The Host", symbol: "🫖", message: "Gather others around your table." },
    Archetype { name: "The Mirror", symbol: "🪞", message: "See yourself as others see you." },
    Archetype { name: "The Crown", symbol: "👑", message: "Own what you have built." },
    Archetype { name: "The Flame", symbol: "🔥", message: "Burn bright, but watch the fuel." },
    Archetype { name: "The Harvest", symbol: "🌾", message: "Gather what ripened this cycle." },
    Archetype { name: "The Turning", symbol: "🍂", message: "The tide shifts. Soften your grip." },
    Archetype { name: "The Editor", symbol: "✂️", message: "Cut what no longer serves." },
    Archetype { name: "The Owl", symbol: "🦉", message: "Look back with clear eyes." },
    Archetype { name: "The Tide", symbol: "🌙", message: "Let things recede without chasing." },
    Archetype { name: "The Keeper", symbol: "🗝️", message: "Store the lessons, not the weight." },
    Archetype { name: "The Silence", symbol: "🤫", message: "Say less. Feel more." },
    Archetype { name: "The Return", symbol: "🔄", message: "Close the circle. Tomorrow begins again." },
];

/// Look up the archetype for a cycle day.
pub fn archetype_for(day: CycleDay) -> &'static Archetype {
    &ARCHETYPES[day.offset() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::CYCLE_LENGTH;

    #[test]
    fn every_day_has_an_archetype() {
        for elapsed in 0..CYCLE_LENGTH {
            let day = CycleDay::from_elapsed_days(elapsed);
            let archetype = archetype_for(day);
            assert!(!archetype.name.is_empty());
            assert!(!archetype.message.is_empty());
        }
    }

    #[test]
    fn archetype_names_are_distinct() {
        let mut names: Vec<&str> = ARCHETYPES.iter().map(|a| a.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ARCHETYPES.len());
    }

    #[test]
    fn day_one_and_day_28_bookend_the_cycle() {
        assert_eq!(archetype_for(CycleDay::from_elapsed_days(0)).name, "The Seed");
        assert_eq!(archetype_for(CycleDay::from_elapsed_days(27)).name, "The Return");
        // Wrap: elapsed day 28 is day 1 again.
        assert_eq!(archetype_for(CycleDay::from_elapsed_days(28)).name, "The Seed");
    }
}
