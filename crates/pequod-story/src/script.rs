//! The fixed story: scene tables, epilogues, and framing text.
//!
//! Everything here is static data. Consequences live in per-option rows, so
//! the graph can be walked and asserted against without rendering anything.

use crate::scene::{ChoiceSpec, Ending, Epilogue, Next, Scene, SceneBody, SceneId};
use crate::state::StatDelta;

/// The scene the walker starts at.
pub const OPENING: SceneId = SceneId::NewBedford;

/// The game title, framed and uppercased by the presenter.
pub const TITLE: &str = "Moby Dick: A Text Adventure";

/// Introduction rendered before the first scene.
pub const INTRO: &str = r#"Call me Ishmael. Some years ago—never mind how long precisely—
having little or no money in my purse, and nothing particular
to interest me on shore, I thought I would sail about a little
and see the watery part of the world.

It is a way I have of driving off the spleen and regulating
the circulation. Whenever I find myself growing grim about
the mouth; whenever it is a damp, drizzly November in my soul...
then, I account it high time to get to sea as soon as I can.

You are Ishmael, a young man seeking adventure on the high seas.
Your choices will determine your fate aboard the whaling ship Pequod,
and your encounter with the legendary white whale, Moby Dick."#;

/// Farewell line for an interrupted session.
pub const FAREWELL: &str = "Game interrupted. Farewell, sailor!";

/// Closing acknowledgment printed on every exit path.
pub const CLOSING: &str = "Thank you for playing Moby Dick: A Text Adventure!";

/// Look up a scene's static table entry.
pub fn scene(id: SceneId) -> &'static Scene {
    match id {
        SceneId::NewBedford => &NEW_BEDFORD,
        SceneId::MeetQueequeg => &MEET_QUEEQUEG,
        SceneId::MorningSermon => &MORNING_SERMON,
        SceneId::JourneyToNantucket => &JOURNEY_TO_NANTUCKET,
        SceneId::SigningThePequod => &SIGNING_THE_PEQUOD,
        SceneId::AskAboutAhab => &ASK_ABOUT_AHAB,
        SceneId::ElijahProphecy => &ELIJAH_PROPHECY,
        SceneId::ChristmasDeparture => &CHRISTMAS_DEPARTURE,
        SceneId::EarlyVoyage => &EARLY_VOYAGE,
        SceneId::AhabAppears => &AHAB_APPEARS,
        SceneId::DoubloonCeremony => &DOUBLOON_CEREMONY,
        SceneId::FinalChase => &FINAL_CHASE,
        SceneId::FinalConfrontation => &FINAL_CONFRONTATION,
    }
}

/// Look up the epilogue for an ending.
pub fn epilogue(ending: Ending) -> &'static Epilogue {
    match ending {
        Ending::Survivor => &EPILOGUE_SURVIVOR,
        Ending::Hero => &EPILOGUE_HERO,
        Ending::Obsessed => &EPILOGUE_OBSESSED,
    }
}

static NEW_BEDFORD: Scene = Scene {
    id: SceneId::NewBedford,
    chapter: 1,
    title: Some("Chapter 1: New Bedford"),
    text: r#"December winds bite through your worn coat as you arrive in New Bedford,
Massachusetts. The cobblestone streets glisten with frost, and the smell
of whale oil and tar fills the air. You've come here with one purpose:
to sign aboard a whaling vessel and seek your fortune on the seas.

The Spouter-Inn looms before you, its weathered sign creaking in the wind.
Inside, you can hear the raucous laughter of sailors and the clink of
pewter mugs. But the innkeeper informs you that all rooms are taken...
except for one bed that you'd have to share with a stranger."#,
    body: SceneBody::Choice {
        prompt: "What do you do?",
        options: &[
            ChoiceSpec {
                label: "Accept the shared bed - you need rest before tomorrow",
                aftermath: r#"You accept the arrangement and are shown to a small room upstairs.
The bed is large enough for two, and you settle in to wait for
your mysterious roommate..."#,
                stats: StatDelta::NONE,
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::MeetQueequeg),
            },
            ChoiceSpec {
                label: "Sleep in the common room by the fire",
                aftermath: r#"You decide to sleep by the fire in the common room. It's not
comfortable, but it's warm and free. You overhear sailors
talking about various ships and their captains."#,
                stats: StatDelta::NONE.with_health(-10).with_money(2),
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::MorningSermon),
            },
            ChoiceSpec {
                label: "Find another inn, even if it costs more money",
                aftermath: r#"You venture back into the cold night, searching for another inn.
After an hour of walking, you find a more expensive but private room.
Your purse is lighter, but you sleep well."#,
                stats: StatDelta::NONE.with_health(5).with_money(-5),
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::MorningSermon),
            },
        ],
    },
};

static MEET_QUEEQUEG: Scene = Scene {
    id: SceneId::MeetQueequeg,
    chapter: 1,
    title: None,
    text: r#"Late at night, you're awakened by heavy footsteps. The door opens
and in walks the most extraordinary figure you've ever seen - a tall,
powerfully built man covered in intricate tattoos. His head is partially
shaved, and he carries a tomahawk and a harpoon.

This is Queequeg, a Polynesian harpooner from the island of Rokovoko.
At first, you're terrified - he looks like a cannibal! But as he
prepares for bed with quiet dignity, you realize he means no harm."#,
    body: SceneBody::Choice {
        prompt: "How do you react to your unusual roommate?",
        options: &[
            ChoiceSpec {
                label: "Try to communicate and be friendly",
                aftermath: r#"Despite the language barrier, you manage to communicate through
gestures and simple words. Queequeg shares his pipe with you -
a peace offering. By morning, you've formed an unlikely friendship."#,
                stats: StatDelta::NONE.with_sanity(10).with_reputation(5),
                relationships: &[("Queequeg", 30)],
                flags: &["met_queequeg"],
                items: &["Queequeg's pipe"],
                next: Next::Scene(SceneId::MorningSermon),
            },
            ChoiceSpec {
                label: "Pretend to sleep and avoid interaction",
                aftermath: r#"You lie still, watching Queequeg through half-closed eyes. He
performs what seems to be a religious ritual with a small wooden
idol, then sleeps peacefully. In the morning, he nods politely
to you before leaving."#,
                stats: StatDelta::NONE,
                relationships: &[("Queequeg", 5)],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::MorningSermon),
            },
            ChoiceSpec {
                label: "Demand he leave the room immediately",
                aftermath: r#"Your outburst startles Queequeg, but he simply stares at you with
calm dignity. The innkeeper arrives and explains that Queequeg is
a respected harpooner. You feel foolish and apologize awkwardly."#,
                stats: StatDelta::NONE.with_reputation(-5),
                relationships: &[("Queequeg", -10)],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::MorningSermon),
            },
        ],
    },
};

static MORNING_SERMON: Scene = Scene {
    id: SceneId::MorningSermon,
    chapter: 2,
    title: Some("Father Mapple's Sermon"),
    text: r#"The next morning, you and Queequeg (if you befriended him) attend
Father Mapple's sermon at the Whaleman's Chapel. The old preacher
climbs into his pulpit via a rope ladder, then pulls it up after him.

His sermon is about Jonah and the whale - a tale that seems to
foreshadow your own journey. He speaks of disobedience to God,
of being swallowed by a great fish, and of redemption through suffering."#,
    body: SceneBody::Choice {
        prompt: "How does the sermon affect you?",
        options: &[
            ChoiceSpec {
                label: "You're deeply moved and feel spiritually prepared",
                aftermath: "The sermon fills you with resolve and peace.",
                stats: StatDelta::NONE.with_sanity(15).with_health(5),
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::JourneyToNantucket),
            },
            ChoiceSpec {
                label: "You're unsettled by the dark omens",
                aftermath: "Dark thoughts cloud your mind as you leave the chapel.",
                stats: StatDelta::NONE.with_sanity(-10),
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::JourneyToNantucket),
            },
            ChoiceSpec {
                label: "You're bored and think it's just superstition",
                aftermath: "Your dismissive attitude is noticed by other whalers.",
                stats: StatDelta::NONE.with_reputation(-5),
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::JourneyToNantucket),
            },
        ],
    },
};

static JOURNEY_TO_NANTUCKET: Scene = Scene {
    id: SceneId::JourneyToNantucket,
    chapter: 3,
    title: Some("Journey to Nantucket"),
    text: r#"You and Queequeg board a packet schooner bound for Nantucket,
the whaling capital of the world. The island appears through
the morning mist - a sandy, treeless place surrounded by
the vast ocean.

Nantucket's streets bustle with activity. Whale oil merchants,
ship chandlers, and sailors from around the world fill the
cobblestone ways. The smell of ambergris and spermaceti
permeates the air."#,
    body: SceneBody::Continue {
        stats: StatDelta::NONE,
        next: Next::Scene(SceneId::SigningThePequod),
    },
};

static SIGNING_THE_PEQUOD: Scene = Scene {
    id: SceneId::SigningThePequod,
    chapter: 4,
    title: Some("The Pequod"),
    text: r#"At the wharf, you examine several whaling ships. The Pequod
catches your eye - an old ship with a strange, barbaric appearance.
Her hull is darkened by age and weather, and she's decorated
with whale bone and teeth.

You meet the ship's Quaker owners: Captain Peleg and Captain Bildad.
Peleg is gruff but fair, while Bildad is miserly and quotes scripture.
They're willing to sign you on as a green hand."#,
    body: SceneBody::Choice {
        prompt: "What terms do you negotiate?",
        options: &[
            ChoiceSpec {
                label: "Accept their first offer - you need the work",
                aftermath: r#"You accept their offer of a 300th lay (share of profits).
It's not much, but it's a start in the whaling business."#,
                stats: StatDelta::NONE.with_money(5).with_reputation(5),
                relationships: &[],
                flags: &["signed_pequod"],
                items: &[],
                next: Next::Scene(SceneId::ElijahProphecy),
            },
            ChoiceSpec {
                label: "Try to negotiate better terms",
                aftermath: r#"You attempt to negotiate, but Bildad is unmoved. However,
Peleg respects your boldness and improves your lay slightly."#,
                stats: StatDelta::NONE.with_money(10).with_reputation(10),
                relationships: &[],
                flags: &["signed_pequod"],
                items: &[],
                next: Next::Scene(SceneId::ElijahProphecy),
            },
            // A real fork: this option changes the route, not the numbers.
            ChoiceSpec {
                label: "Ask about the ship's captain before deciding",
                aftermath: "",
                stats: StatDelta::NONE,
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::AskAboutAhab),
            },
        ],
    },
};

static ASK_ABOUT_AHAB: Scene = Scene {
    id: SceneId::AskAboutAhab,
    chapter: 4,
    title: None,
    text: r#"When you ask about Captain Ahab, Peleg's expression grows serious.

"Ahab? Oh, Ahab's been in colleges as well as 'mong the cannibals;
been used to deeper wonders than the waves; fixed his fiery lance
in mightier, stranger foes than whales. He's a grand, ungodly,
god-like man, Captain Ahab; doesn't speak much; but when he does
speak, then you may well listen."

Peleg mentions that Ahab lost his leg to a whale - "devoured,
chewed up, crunched by the monstrousest parmacetty that ever
chipped a boat!""#,
    body: SceneBody::Choice {
        prompt: "How do you respond to this information?",
        options: &[
            ChoiceSpec {
                label: "You're intrigued by this mysterious captain",
                aftermath: "",
                stats: StatDelta::NONE.with_sanity(-5).with_reputation(5),
                relationships: &[],
                flags: &["signed_pequod"],
                items: &[],
                next: Next::Scene(SceneId::ElijahProphecy),
            },
            ChoiceSpec {
                label: "You're concerned about sailing under a wounded man",
                aftermath: "",
                stats: StatDelta::NONE.with_sanity(-10),
                relationships: &[],
                flags: &["signed_pequod"],
                items: &[],
                next: Next::Scene(SceneId::ElijahProphecy),
            },
            ChoiceSpec {
                label: "You decide to sign anyway - adventure calls",
                aftermath: "",
                stats: StatDelta::NONE.with_sanity(5),
                relationships: &[],
                flags: &["signed_pequod"],
                items: &[],
                next: Next::Scene(SceneId::ElijahProphecy),
            },
        ],
    },
};

static ELIJAH_PROPHECY: Scene = Scene {
    id: SceneId::ElijahProphecy,
    chapter: 5,
    title: Some("The Prophet Elijah"),
    text: r#"As you leave the ship's office, a ragged man approaches you.
He introduces himself as Elijah and claims to be a prophet.
His wild eyes fix upon you with unsettling intensity.

"Shipmates, have ye shipped in that ship?"

When you confirm you've signed aboard the Pequod, his expression
grows grave. He speaks in riddles about Captain Ahab, mentioning
something about his soul being in the hands of the devil."#,
    body: SceneBody::Choice {
        prompt: "How do you react to Elijah's warnings?",
        options: &[
            ChoiceSpec {
                label: "Listen carefully to his prophecy",
                aftermath: r#"Elijah speaks of doom and destruction, of a captain who has
made a bargain with dark forces. His words chill you to the bone."#,
                stats: StatDelta::NONE.with_sanity(-15),
                relationships: &[],
                flags: &["heard_prophecy"],
                items: &[],
                next: Next::Scene(SceneId::ChristmasDeparture),
            },
            ChoiceSpec {
                label: "Dismiss him as a mad old sailor",
                aftermath: r#"You brush off the old man's warnings as the ravings of someone
who's spent too long at sea. Still, his words linger in your mind."#,
                stats: StatDelta::NONE.with_sanity(-5),
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::ChristmasDeparture),
            },
            ChoiceSpec {
                label: "Ask him specific questions about Ahab",
                aftermath: r#"Elijah's answers are cryptic, but you sense genuine fear in his voice
when he speaks of Ahab. Something terrible happened on the captain's
last voyage."#,
                stats: StatDelta::NONE.with_sanity(-10),
                relationships: &[],
                flags: &["heard_prophecy"],
                items: &[],
                next: Next::Scene(SceneId::ChristmasDeparture),
            },
        ],
    },
};

static CHRISTMAS_DEPARTURE: Scene = Scene {
    id: SceneId::ChristmasDeparture,
    chapter: 6,
    title: Some("Christmas Departure"),
    text: r#"On a cold Christmas morning, the Pequod prepares to depart.
The crew loads final provisions while a bitter wind whips
across Nantucket harbor. You notice shadowy figures boarding
the ship - men you don't recognize from the crew roster.

Captain Ahab is nowhere to be seen. The ship is commanded by
the mates: Starbuck, Stubb, and Flask. As the anchor is weighed
and sails unfurled, you feel the Pequod come alive beneath your feet.

The great adventure begins!"#,
    body: SceneBody::Continue {
        stats: StatDelta::NONE.with_health(10).with_sanity(5),
        next: Next::Scene(SceneId::EarlyVoyage),
    },
};

static EARLY_VOYAGE: Scene = Scene {
    id: SceneId::EarlyVoyage,
    chapter: 7,
    title: Some("Early Days at Sea"),
    text: r#"The first weeks at sea are a blur of new experiences. You learn
the ropes (literally), stand watches, and begin to understand
the rhythm of life aboard a whaling ship.

You meet your fellow crew members:
- Starbuck: The chief mate, a thoughtful Quaker from Nantucket
- Stubb: The second mate, cheerful and philosophical
- Flask: The third mate, eager and somewhat reckless
- The harpooners: Queequeg, Tashtego (a Native American), and Daggoo (an African)

Still, Captain Ahab remains in his cabin, unseen by the crew."#,
    body: SceneBody::Choice {
        prompt: "How do you spend your time during these early days?",
        options: &[
            ChoiceSpec {
                label: "Focus on learning whaling skills from the harpooners",
                aftermath: r#"You spend time with the harpooners, learning their skills.
Queequeg teaches you to throw a harpoon, while Tashtego
shows you how to read the signs of whales."#,
                stats: StatDelta::NONE.with_health(10).with_reputation(10),
                relationships: &[("Queequeg", 10)],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::AhabAppears),
            },
            ChoiceSpec {
                label: "Study the sea and whales with Ishmael's scholarly mind",
                aftermath: r#"You begin your systematic study of whales and whaling,
developing the knowledge that will serve you well.
Your scholarly approach impresses the officers."#,
                stats: StatDelta::NONE.with_sanity(10).with_reputation(5),
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::AhabAppears),
            },
            ChoiceSpec {
                label: "Try to learn more about the mysterious Captain Ahab",
                aftermath: r#"You ask questions about Ahab, but the crew grows uncomfortable.
Some speak of his previous voyage and the whale that took his leg.
The mystery deepens."#,
                stats: StatDelta::NONE.with_sanity(-5),
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::AhabAppears),
            },
        ],
    },
};

static AHAB_APPEARS: Scene = Scene {
    id: SceneId::AhabAppears,
    chapter: 8,
    title: Some("Captain Ahab Revealed"),
    text: r#"After weeks at sea, Captain Ahab finally emerges from his cabin.
The crew falls silent as he appears on the quarterdeck. He's a
tall, imposing figure with a white scar running down his face
like lightning. Most striking is his leg - or rather, the ivory
peg leg carved from a whale's jawbone that replaces it.

His eyes burn with an intensity that makes you uncomfortable.
This is a man consumed by something dark and powerful.

Ahab surveys his crew with those piercing eyes, then speaks
in a voice like thunder..."#,
    body: SceneBody::Choice {
        prompt: "What is your first impression of Captain Ahab?",
        options: &[
            ChoiceSpec {
                label: "He's a natural leader - you feel inspired",
                aftermath: "",
                stats: StatDelta::NONE.with_reputation(5),
                relationships: &[("Ahab", 10)],
                flags: &["ahab_revealed"],
                items: &[],
                next: Next::Scene(SceneId::DoubloonCeremony),
            },
            ChoiceSpec {
                label: "He's frightening - something is wrong with him",
                aftermath: "",
                stats: StatDelta::NONE.with_sanity(-10),
                relationships: &[],
                flags: &["ahab_revealed"],
                items: &[],
                next: Next::Scene(SceneId::DoubloonCeremony),
            },
            ChoiceSpec {
                label: "He's tragic - you feel pity for his suffering",
                aftermath: "",
                stats: StatDelta::NONE.with_sanity(-5),
                relationships: &[("Ahab", 5)],
                flags: &["ahab_revealed"],
                items: &[],
                next: Next::Scene(SceneId::DoubloonCeremony),
            },
        ],
    },
};

static DOUBLOON_CEREMONY: Scene = Scene {
    id: SceneId::DoubloonCeremony,
    chapter: 9,
    title: Some("The Golden Doubloon"),
    text: r#"Ahab calls all hands on deck. From his pocket, he produces
a golden Spanish doubloon and holds it high for all to see.
The coin glints in the sunlight as he speaks:

"Whosoever of ye raises me a white-headed whale with a wrinkled
brow and a crooked jaw; whosoever of ye raises me that white-headed
whale, with three holes punctured in his starboard fluke - look ye,
whosoever of ye raises me that same white whale, he shall have this
gold ounce, my boys!"

He nails the doubloon to the mainmast with a tremendous blow.

"It's a white whale, I say! A white whale! Skin your eyes for him,
men; look sharp for white water; if ye see but a bubble, sing out!"

The crew erupts in excitement, but you notice Starbuck's troubled expression."#,
    body: SceneBody::Choice {
        prompt: "How do you react to Ahab's announcement?",
        options: &[
            ChoiceSpec {
                label: "Join in the crew's enthusiasm for the hunt",
                aftermath: r#"You cheer with the rest of the crew. The promise of gold and
the thrill of hunting the legendary white whale stirs your blood!"#,
                stats: StatDelta::NONE.with_reputation(10).with_sanity(-5),
                relationships: &[("Ahab", 15)],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::FinalChase),
            },
            ChoiceSpec {
                label: "Share Starbuck's concern about this obsession",
                aftermath: r#"Like Starbuck, you're troubled by the captain's obsession.
This doesn't feel like a normal whaling voyage anymore."#,
                stats: StatDelta::NONE.with_sanity(-10),
                relationships: &[("Starbuck", 15)],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::FinalChase),
            },
            ChoiceSpec {
                label: "Stay neutral and observe the situation",
                aftermath: r#"You watch carefully, trying to understand the dynamics at play.
The crew is divided between excitement and unease."#,
                stats: StatDelta::NONE.with_sanity(-5),
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::Scene(SceneId::FinalChase),
            },
        ],
    },
};

static FINAL_CHASE: Scene = Scene {
    id: SceneId::FinalChase,
    chapter: 10,
    title: Some("The Final Chase"),
    text: r#"After many adventures and encounters with other ships, the
Pequod finally enters the waters where Moby Dick roams.
Ahab can smell his nemesis in the air.

"There she blows! There she blows! A hump like a snow-hill!
It is Moby Dick!"

There, in the distance, is the legendary White Whale -
massive, scarred, and terrible. His huge white bulk rises
from the sea like a moving island.

The three-day chase begins..."#,
    body: SceneBody::Continue {
        stats: StatDelta::NONE,
        next: Next::Scene(SceneId::FinalConfrontation),
    },
};

static FINAL_CONFRONTATION: Scene = Scene {
    id: SceneId::FinalConfrontation,
    chapter: 11,
    title: Some("The Final Battle"),
    text: r#"For three days, the Pequod pursues Moby Dick across the Pacific.
Each day brings destruction:

Day One: Moby Dick destroys Ahab's boat with his massive jaws
Day Two: The whale smashes all three boats to splinters
Day Three: Moby Dick turns on the Pequod itself

On the final day, the great whale rams the ship with his
enormous head, staving in her hull. The Pequod begins to sink
as Ahab makes his last desperate attack.

The harpoon line catches around Ahab's neck like a noose.
"Thus, I give up the spear!" he cries as he's dragged down
with the white whale.

The ship sinks in a great vortex, taking all hands with her."#,
    body: SceneBody::Choice {
        prompt: "In these final moments, what do you do?",
        options: &[
            ChoiceSpec {
                label: "Try to escape and survive to tell the tale",
                aftermath: "",
                stats: StatDelta::NONE,
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::End(Ending::Survivor),
            },
            ChoiceSpec {
                label: "Go down fighting with your shipmates",
                aftermath: "",
                stats: StatDelta::NONE,
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::End(Ending::Hero),
            },
            ChoiceSpec {
                label: "Follow Ahab into his final confrontation",
                aftermath: "",
                stats: StatDelta::NONE,
                relationships: &[],
                flags: &[],
                items: &[],
                next: Next::End(Ending::Obsessed),
            },
        ],
    },
};

static EPILOGUE_SURVIVOR: Epilogue = Epilogue {
    ending: Ending::Survivor,
    title: "Epilogue: The Survivor",
    text: r#"As the Pequod sinks, you're thrown clear of the vortex.
Queequeg's coffin, converted to a life buoy, bobs to the
surface. You cling to it as your only salvation.

For a day and a night, you float alone on the vast Pacific.
Just as despair threatens to claim you, a sail appears -
the Rachel, still searching for her lost children.

You are the sole survivor of the Pequod, the only one left
to tell this tale of obsession, revenge, and the terrible
power of the white whale.

"And I only am escaped alone to tell thee."

Your story will be remembered forever."#,
};

static EPILOGUE_HERO: Epilogue = Epilogue {
    ending: Ending::Hero,
    title: "A Hero's End",
    text: r#"You fight to the very end, helping your shipmates and
trying to save the Pequod. Though you cannot prevent
the disaster, your courage inspires others.

You go down with the ship, but your heroic actions
in the final moments help several crew members escape
the initial sinking. You died as you lived - with
honor and courage.

In the depths, you join the eternal struggle between
man and nature, between obsession and reason."#,
};

static EPILOGUE_OBSESSED: Epilogue = Epilogue {
    ending: Ending::Obsessed,
    title: "Into the Abyss",
    text: r#"Caught up in Ahab's magnificent obsession, you follow
him to the very end. You witness his final moments as
the harpoon line drags him down with Moby Dick.

You're pulled into the vortex, understanding at last
the terrible beauty of Ahab's quest. In seeking to
destroy the whale, he destroyed himself - and you
chose to share that destruction.

Your last sight is of Ahab and Moby Dick, locked
together in eternal struggle, disappearing into
the dark depths.

Some obsessions are worth dying for."#,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    #[test]
    fn befriending_queequeg_pays_off() {
        let mut state = GameState::new();

        let first = scene(SceneId::NewBedford)
            .resolve(Some(0), &mut state)
            .unwrap();
        assert_eq!(first.next, Next::Scene(SceneId::MeetQueequeg));

        let second = scene(SceneId::MeetQueequeg)
            .resolve(Some(0), &mut state)
            .unwrap();
        assert_eq!(state.relationship("Queequeg"), 30);
        assert_eq!(state.sanity, 100, "sanity 100 + 10 clamps back to 100");
        assert_eq!(state.reputation, 55);
        assert!(state.flag("met_queequeg"));
        assert!(state.inventory.contains(&"Queequeg's pipe".to_string()));
        assert_eq!(second.next, Next::Scene(SceneId::MorningSermon));
    }

    #[test]
    fn sleeping_by_the_fire_skips_queequeg() {
        let mut state = GameState::new();
        let resolution = scene(SceneId::NewBedford)
            .resolve(Some(1), &mut state)
            .unwrap();
        assert_eq!(state.health, 90);
        assert_eq!(state.money, 22);
        assert_eq!(resolution.next, Next::Scene(SceneId::MorningSermon));
    }

    #[test]
    fn asking_about_the_captain_diverts_the_route() {
        let mut before = GameState::new();
        let diverted = scene(SceneId::SigningThePequod)
            .resolve(Some(2), &mut before)
            .unwrap();
        assert_eq!(diverted.next, Next::Scene(SceneId::AskAboutAhab));
        // The detour itself changes nothing; the numbers come later.
        assert_eq!(before.money, GameState::new().money);
        assert!(!before.flag("signed_pequod"));

        for choice in [0, 1] {
            let mut state = GameState::new();
            let straight = scene(SceneId::SigningThePequod)
                .resolve(Some(choice), &mut state)
                .unwrap();
            assert_eq!(straight.next, Next::Scene(SceneId::ElijahProphecy));
            assert!(state.flag("signed_pequod"));
        }
    }

    #[test]
    fn every_backstory_answer_still_signs_the_articles() {
        for choice in 0..3 {
            let mut state = GameState::new();
            let resolution = scene(SceneId::AskAboutAhab)
                .resolve(Some(choice), &mut state)
                .unwrap();
            assert!(state.flag("signed_pequod"));
            assert_eq!(resolution.next, Next::Scene(SceneId::ElijahProphecy));
        }
    }

    #[test]
    fn departure_is_a_pure_beat_with_fixed_gains() {
        let mut state = GameState::new();
        state.health = 80;
        state.sanity = 80;
        let resolution = scene(SceneId::ChristmasDeparture)
            .resolve(None, &mut state)
            .unwrap();
        assert_eq!(state.health, 90);
        assert_eq!(state.sanity, 85);
        assert_eq!(resolution.next, Next::Scene(SceneId::EarlyVoyage));
    }

    #[test]
    fn the_last_choice_fans_out_to_three_distinct_endings() {
        let mut seen = Vec::new();
        for choice in 0..3 {
            let mut state = GameState::new();
            let resolution = scene(SceneId::FinalConfrontation)
                .resolve(Some(choice), &mut state)
                .unwrap();
            match resolution.next {
                Next::End(ending) => seen.push(ending),
                Next::Scene(id) => panic!("expected an ending, got {id:?}"),
            }
        }
        assert_eq!(seen, vec![Ending::Survivor, Ending::Hero, Ending::Obsessed]);
    }

    #[test]
    fn lookup_agrees_with_ids() {
        for id in SceneId::ALL {
            assert_eq!(scene(id).id, id);
        }
        for ending in Ending::ALL {
            assert_eq!(epilogue(ending).ending, ending);
        }
    }
}
