//! Word lists the name faker draws from. Entries are single lowercase words.

pub const ANIMALS: &[&str] = &[
    "alligator", "alpaca", "ant", "antelope", "armadillo", "badger", "bat", "bear", "beaver",
    "bee", "beetle", "bison", "buffalo", "butterfly", "camel", "caribou", "cat", "cheetah",
    "chinchilla", "cobra", "cougar", "coyote", "crab", "crane", "crow", "deer", "dingo", "dog",
    "dolphin", "donkey", "dove", "duck", "eagle", "eel", "elephant", "elk", "emu", "falcon",
    "ferret", "finch", "flamingo", "fox", "frog", "gazelle", "gecko", "gerbil", "giraffe",
    "gnu", "goat", "goose", "gorilla", "hamster", "hare", "hawk", "hedgehog", "heron", "hippo",
    "hornet", "horse", "hyena", "ibex", "iguana", "impala", "jackal", "jaguar", "kangaroo",
    "kiwi", "koala", "lemur", "leopard", "lion", "lizard", "llama", "lobster", "lynx",
    "magpie", "mole", "mongoose", "monkey", "moose", "mouse", "narwhal", "newt", "ocelot",
    "octopus", "opossum", "orca", "ostrich", "otter", "owl", "ox", "panda", "panther",
    "parrot", "peacock", "pelican", "penguin", "pigeon", "puma", "quail", "rabbit", "raccoon",
    "raven", "reindeer", "rhino", "salmon", "seal", "shark", "sheep", "skunk", "sloth",
    "snail", "sparrow", "squid", "squirrel", "stork", "swan", "tapir", "tiger", "toad",
    "toucan", "turkey", "turtle", "viper", "vulture", "walrus", "wasp", "weasel", "whale",
    "wolf", "wombat", "yak", "zebra",
];

pub const COLORS: &[&str] = &[
    "amber", "aqua", "azure", "beige", "black", "blue", "bronze", "brown", "burgundy",
    "charcoal", "chartreuse", "coral", "crimson", "cyan", "emerald", "fuchsia", "gold",
    "gray", "green", "indigo", "ivory", "jade", "khaki", "lavender", "lilac", "lime",
    "magenta", "maroon", "mauve", "mint", "mustard", "navy", "ochre", "olive", "orange",
    "orchid", "peach", "pink", "plum", "purple", "red", "ruby", "rust", "saffron", "salmon",
    "sapphire", "scarlet", "sepia", "silver", "tan", "teal", "turquoise", "ultramarine",
    "vermilion", "violet", "white", "yellow",
];
