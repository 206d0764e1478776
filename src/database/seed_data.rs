use crate::models::Activity;

struct ActivitySeed {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: usize,
    participants: &'static [&'static str],
}

const ACTIVITY_SEEDS: &[ActivitySeed] = &[
    ActivitySeed {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    ActivitySeed {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    ActivitySeed {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    ActivitySeed {
        name: "Basketball Team",
        description: "Practice drills and compete in inter-school basketball games",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        max_participants: 15,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    ActivitySeed {
        name: "Soccer Club",
        description: "Train together and play friendly soccer matches",
        schedule: "Wednesdays, 3:30 PM - 5:30 PM",
        max_participants: 22,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    ActivitySeed {
        name: "Art Club",
        description: "Explore painting, drawing and mixed media projects",
        schedule: "Mondays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["isabella@mergington.edu", "amelia@mergington.edu"],
    },
    ActivitySeed {
        name: "Drama Club",
        description: "Rehearse and perform in school plays and showcases",
        schedule: "Thursdays, 3:30 PM - 5:30 PM",
        max_participants: 20,
        participants: &["harper@mergington.edu", "evelyn@mergington.edu"],
    },
    ActivitySeed {
        name: "Math Club",
        description: "Solve challenging problems and prepare for math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    ActivitySeed {
        name: "Debate Team",
        description: "Build public speaking skills and compete in debate tournaments",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

/// The compiled-in activity catalog, in display order.
pub fn default_activities() -> Vec<Activity> {
    ACTIVITY_SEEDS
        .iter()
        .map(|seed| {
            Activity::new(
                seed.name,
                seed.description,
                seed.schedule,
                seed.max_participants,
            )
            .with_participants(seed.participants.iter().copied())
        })
        .collect()
}
