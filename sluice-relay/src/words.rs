//! The frozen nickname word list.
//!
//! 2048 lowercase entries. The list is not part of the wire protocol and
//! must never be reordered or edited: nicknames are only meaningful within
//! a single process lifetime, but tests and logs assume stable indexing.

/// Number of entries in [`WORDS`].
pub const WORD_COUNT: usize = 2048;

/// The word list. Index with a value reduced modulo [`WORD_COUNT`].
#[rustfmt::skip]
pub static WORDS: [&str; WORD_COUNT] = [
    "aardvark", "abyss", "academy", "acrostic", "adagio", "admiral", "adroit", "afternoon",
    "agate", "agouti", "aigrette", "airship", "airy", "alabastergem", "albatross", "alder",
    "alert", "allegro", "almond", "alphabet", "alpinebed", "altocumulus", "aluminum", "amber",
    "amberjack", "amethyst", "ammeter", "ample", "anagram", "anchor", "anchovy", "andante",
    "anemometer", "anemone", "angora", "anise", "anteater", "antelope", "anthracite", "antimony",
    "anvil", "anvilcloud", "aphid", "apiary", "apple", "apricot", "april", "apron",
    "aquagem", "aquamarine", "aquarius", "aqueduct", "aquila", "arbor", "arcade", "archipelago",
    "architrave", "arctic", "arete", "aria", "aries", "arpeggio", "arroyo", "artichoke",
    "arugula", "asparagus", "aspen", "asteroid", "astrolabe", "atelier", "athenaeum", "atrium",
    "attic", "auger", "august", "aurora", "austral", "automobile", "autumn", "awl",
    "axe", "azimuth", "azurite", "baboon", "badger", "bag", "baguette", "baize",
    "balalaika", "balcony", "baler", "ballad", "balloon", "balmy", "bamboo", "bandicoot",
    "bandsaw", "banister", "bank", "banner", "baobab", "bar", "barbel", "barbet",
    "barchan", "barge", "bark", "barn", "barnacle", "barometer", "barracuda", "basalt",
    "basil", "basket", "bass", "basswood", "baste", "bat", "batiste", "battery",
    "battlement", "bay", "bayou", "beacon", "beagle", "beam", "beaming", "bear",
    "bearberry", "beater", "beaver", "bee", "beech", "beet", "beige", "belfry",
    "bellows", "belt", "berth", "beryl", "bevel", "bicycle", "bilge", "bin",
    "binocular", "biplane", "biscuit", "bismuth", "bisque", "bit", "bittern", "black",
    "blackbird", "blackeyed", "blade", "blanket", "blaze", "blend", "blimp", "blizzard",
    "blotter", "bluebell", "blueberry", "bluff", "boar", "boathouse", "bob", "bobbin",
    "bobcat", "bobsled", "bodhran", "bold", "bole", "bollard", "bolster", "bonefish",
    "bonfire", "boning", "bonito", "boom", "bootes", "boreal", "boron", "bottle",
    "bough", "bowfin", "bowl", "boxcar", "brace", "bracken", "braid", "brake",
    "branch", "brass", "brawny", "brazier", "breadboard", "breadfruit", "breaker", "breakup",
    "breeze", "brew", "bridge", "brie", "brigantine", "bright", "briny", "brioche",
    "broad", "broadcloth", "broccoli", "bromine", "bronzehue", "broth", "brown", "brush",
    "buckle", "budgie", "buff", "buffer", "buggy", "bulb", "bull", "bullhead",
    "bumblebee", "bundle", "bung", "bunk", "bunting", "buoyant", "burgee", "burl",
    "burlap", "bustard", "butte", "butterfly", "butternut", "buzzard", "byre", "cabin",
    "cablecar", "caboose", "caddisfly", "cadence", "calcium", "caldera", "calico", "caliper",
    "calm", "cambium", "camera", "campfire", "campus", "camshaft", "canbuoy", "cancer",
    "candy", "caning", "cannery", "canning", "canoe", "canola", "cantaloupe", "canteen",
    "canvas", "canyon", "cape", "capricorn", "capstan", "capybara", "caracal", "carambola",
    "caramel", "carbon", "cardamom", "cardinal", "careful", "caribou", "carillon", "carmine",
    "carnelian", "carp", "carpet", "carrot", "cart", "carving", "cascade", "casement",
    "cashmere", "cassava", "casserole", "cassowary", "castanet", "castorbean", "catamaran", "cataract",
    "catnip", "cattle", "cauliflower", "cayenne", "celeriac", "celery", "cell", "cellar",
    "centipede", "central", "cepheus", "cereal", "cerulean", "cesium", "chai", "chain",
    "chalet", "chalice", "chalkline", "chamois", "chandelier", "channel", "char", "charcoal",
    "charger", "charon", "chartreuse", "cheddar", "cheerful", "cheesecloth", "cheetah", "cherry",
    "cherryred", "chervil", "chest", "chestnuthue", "chick", "chicken", "chickpea", "chiffon",
    "chill", "chimp", "chinchilla", "chintz", "chipboard", "chipper", "chisel", "chlorine",
    "chocolate", "chord", "chowder", "chromium", "chub", "churn", "chutney", "cicada",
    "cilantro", "cinnabar", "cipher", "circle", "cirrus", "citadel", "citrus", "clam",
    "clapboard", "clarinet", "claves", "clavichord", "clear", "clearing", "cleaver", "clever",
    "clip", "clipper", "cloister", "close", "cloudbank", "clover", "cluster", "coach",
    "coal", "coaster", "cobalt", "cobbler", "cockade", "cockle", "cocoa", "cod",
    "coda", "codex", "coffee", "coil", "col", "coldframe", "coldfront", "college",
    "collie", "colt", "column", "combine", "comet", "compass", "concertina", "condor",
    "confluence", "conga", "consonant", "contrail", "cool", "cooler", "coot", "copper",
    "coppice", "copse", "coral", "coralgem", "cord", "corduroy", "corer", "coriander",
    "cormorant", "cornet", "cornmeal", "corona", "corundum", "corvette", "cosmos", "cottage",
    "cottonwood", "cougar", "couloir", "couplet", "courtyard", "cove", "cover", "cow",
    "cowbell", "cowslip", "coyote", "crab", "crabapple", "crag", "cramp", "crane",
    "crank", "crate", "crater", "crayon", "cream", "creamery", "crease", "creel",
    "creeper", "crepe", "crescendo", "crest", "cricket", "crimson", "crisper", "croaker",
    "crocus", "croft", "crop", "crosscut", "crucible", "cruet", "crumble", "crush",
    "cuckoo", "cucumber", "cupcake", "cupola", "curfew", "curious", "curlew", "currant",
    "curry", "curtain", "custard", "cutter", "cuttlefish", "cyan", "cygnet", "cymbal",
    "cypress", "daffodil", "dahlia", "dairy", "daisy", "damask", "damselfly", "dapper",
    "darn", "darter", "dash", "dawn", "daybeacon", "decade", "decanter", "deck",
    "deep", "deft", "deimos", "dell", "delta", "derecho", "desert", "dewberry",
    "dhole", "diamond", "die", "dill", "diner", "dinghy", "dione", "dipper",
    "dishcloth", "distaff", "distillery", "dive", "djembe", "dobsonfly", "dock", "dog",
    "dogwood", "doldrums", "dolphin", "dome", "donut", "doormat", "dormer", "dory",
    "doughty", "dove", "dovekie", "dowel", "downslope", "draco", "dragnet", "drake",
    "drape", "dredger", "dregs", "drill", "drizzle", "drone", "drum", "drumroll",
    "drydock", "duckling", "duffel", "dulcimer", "dumpling", "dune", "durian", "dustdevil",
    "dutchoven", "dynamo", "eagle", "earth", "earthworm", "easel", "easterlies", "eave",
    "ebony", "ebonyhue", "eclair", "eclipse", "eel", "eggplant", "eider", "eland",
    "elephant", "elk", "ember", "embroider", "emporium", "emu", "enceladus", "endive",
    "ensign", "envelope", "epoch", "epoxy", "equinox", "era", "escarole", "escarpment",
    "espresso", "etude", "euphonium", "evening", "ewe", "excavator", "eyelet", "faggot",
    "falafel", "fallow", "fallstreak", "farina", "fawn", "february", "feldspar", "fen",
    "fence", "fennel", "fermata", "fern", "fernery", "ferrule", "ferry", "feta",
    "feverfew", "fiddle", "fiery", "fig", "filament", "file", "finch", "fir",
    "firebreak", "firefly", "firn", "fisher", "fjord", "flagon", "flamingo", "flannel",
    "flashlight", "flask", "flatbed", "flatcar", "flea", "fleece", "flicker", "flint",
    "flitch", "float", "floatrig", "flood", "floodplain", "flounce", "flour", "fluffy",
    "flugelhorn", "flurry", "flute", "flux", "flycatcher", "flywheel", "foal", "fodder",
    "foehn", "fog", "fogbank", "fold", "folio", "foremost", "forenoon", "forge",
    "fork", "forte", "fortress", "fox", "foyer", "freesia", "freezeup", "fresh",
    "freshet", "frieze", "frisky", "fritillary", "frost", "frosty", "fuchsia", "fudge",
    "fulcrum", "fulmar", "funicular", "funnel", "furnace", "furrow", "fuse", "fusilli",
    "fykenet", "gabardine", "gaff", "galaxy", "galena", "gallant", "gallery", "galley",
    "gallop", "gander", "gannet", "gantry", "gap", "garden", "garland", "garnet",
    "garret", "gate", "gather", "gauze", "gavel", "gazelle", "gearbox", "gemini",
    "generator", "gentle", "georgette", "germanium", "gesso", "gibbon", "gillnet", "ginger",
    "gingerbread", "ginkgo", "giraffe", "glacier", "glad", "gladiolus", "gleaming", "glean",
    "glide", "glider", "glissade", "globular", "glossy", "glowing", "glue", "glyph",
    "gneiss", "gnocchi", "goblet", "goby", "gold", "golden", "gonfalon", "gong",
    "gooseberry", "gopher", "gorge", "gorilla", "gouda", "gouge", "gourami", "gourd",
    "grader", "grain", "granary", "granite", "granola", "grapefruit", "graphite", "graupel",
    "gravity", "grayling", "grebe", "greenhouse", "griddle", "grinder", "grist", "grits",
    "grocery", "grosbeak", "groundhog", "grouse", "grove", "guacamole", "guanaco", "guava",
    "guillemot", "guiro", "guitar", "gull", "gum", "gumbo", "guppy", "gusset",
    "gustfront", "gypsum", "gyre", "gyrocopter", "hacksaw", "haddock", "hairstreak", "hake",
    "halibut", "hall", "halyard", "hammer", "hamper", "hamster", "handline", "handsaw",
    "hank", "hardboard", "hare", "harebell", "harmony", "harp", "harpsichord", "harrow",
    "harvest", "hassock", "hasty", "hawk", "hawthorn", "hayfield", "hayrick", "haze",
    "headland", "hearth", "heartwood", "heddle", "hedge", "hedgerow", "heedful", "helicopter",
    "heliotrope", "hem", "hemlock", "hempcloth", "hen", "hercules", "heron", "herringbone",
    "hessian", "high", "hillock", "hippo", "hobby", "hod", "hoist", "hold",
    "hollow", "holly", "home", "homely", "hone", "honey", "honeydew", "honeyed",
    "hoopoe", "hopper", "horn", "hornbill", "hornet", "hornpipe", "horselat", "horseradish",
    "hot", "hotbed", "hound", "hour", "house", "hover", "hovercraft", "huckleberry",
    "hull", "hummingbird", "hummock", "hurricane", "hushed", "hutch", "hyacinth", "hydrofoil",
    "hydrogen", "hygrometer", "hymn", "ibex", "ibis", "icebox", "icebreaker", "icefield",
    "icefog", "icicle", "icy", "indigo", "indium", "ingle", "inlet", "inner",
    "interlock", "interval", "iridium", "iris", "island", "islet", "isotherm", "isthmus",
    "jack", "jackal", "jackfruit", "jackscrew", "jade", "jaguar", "january", "jasper",
    "jay", "jellyfish", "jet", "jetstone", "jetty", "jib", "jig", "jigbait",
    "jog", "joist", "jolly", "jug", "juice", "june", "juniper", "jupiter",
    "jute", "kale", "kaleidoscope", "kangaroo", "katabatic", "kayak", "kea", "keel",
    "keelson", "keep", "kefir", "kennel", "kestrel", "kettle", "khaki", "killdeer",
    "kiln", "kingbird", "kingfisher", "kitbag", "kitten", "kiwi", "klaxon", "knap",
    "knead", "knell", "knoll", "knot", "knotwood", "koala", "kookaburra", "koto",
    "krypton", "kudu", "laboratory", "labradorite", "lace", "lacewing", "ladder", "ladle",
    "lagoon", "lake", "lamp", "lamprey", "lander", "landing", "lapis", "larder",
    "lark", "lath", "lathe", "latte", "lavender", "lawn", "lea", "leaderline",
    "leading", "least", "ledger", "leek", "lees", "legato", "lemming", "lemonade",
    "lemongrass", "lemur", "lens", "leo", "leopard", "lettuce", "levee", "lever",
    "libra", "library", "lid", "lighthouse", "lightship", "lignite", "lily", "limb",
    "lime", "limestone", "limp", "limpet", "linden", "linen", "lingonberry", "link",
    "lintel", "lion", "lithium", "little", "liverwort", "llama", "loaf", "lobby",
    "lobsterpot", "loch", "locomotive", "loden", "loft", "log", "loganberry", "longan",
    "longitude", "loom", "loomhouse", "loop", "loose", "lorikeet", "loris", "lotus",
    "lough", "lucent", "luge", "lullaby", "lumber", "luna", "lupine", "lustrous",
    "lute", "lychee", "lynx", "lyre", "macaque", "macaroni", "mackerel", "madrigal",
    "magnesium", "magnetar", "magnolia", "magpie", "main", "mainsail", "major", "mako",
    "malamute", "mallard", "malt", "malthouse", "mammoth", "manatee", "mandoline", "mandrill",
    "manor", "mansion", "maple", "maraca", "marc", "march", "marigold", "marimba",
    "marjoram", "market", "marlin", "marmot", "maroon", "marsh", "marten", "marvelous",
    "marzipan", "masher", "mast", "mat", "matcha", "maul", "mauve", "mayfly",
    "mazurka", "meadowlark", "meal", "measure", "meek", "melodica", "melody", "melton",
    "meltwater", "mercury", "merganser", "meridian", "merlin", "merry", "mesh", "meteor",
    "metro", "mica", "microscope", "midday", "middlings", "midge", "mighty", "mild",
    "milldam", "millet", "mimas", "mindful", "mink", "minnow", "mint", "minute",
    "mirror", "missive", "mistral", "mite", "mocha", "mohair", "moire", "molasses",
    "mold", "molly", "moment", "monday", "monkey", "monorail", "monsoon", "moon",
    "moonlet", "moonset", "moonstone", "moorhen", "moose", "moraine", "morganite", "mortar",
    "mortarboard", "moss", "moth", "motorbike", "mouflon", "mountain", "mountainash", "mousse",
    "mower", "mozzarella", "muesli", "muffin", "mulberry", "mule", "mullion", "murre",
    "muskie", "muskrat", "mussel", "mustard", "naan", "nadir", "nailset", "napkin",
    "narwhal", "natty", "navy", "neap", "nebula", "nectar", "needle", "neon",
    "neptune", "net", "neve", "newel", "nib", "night", "nightlight", "nimbus",
    "nipper", "noble", "nocturne", "noon", "northern", "notebook", "nougat", "novel",
    "november", "nursery", "nut", "nuthatch", "nutmeg", "oak", "oar", "oasis",
    "oast", "oatmeal", "oboe", "obsidian", "ocarina", "ocean", "ochre", "octave",
    "octopus", "odd", "oilcake", "okapi", "olive", "olivegreen", "onyx", "opal",
    "opera", "opossum", "orangehue", "orangery", "orbit", "orbweaver", "orchard", "orchid",
    "organ", "organdy", "oriole", "orion", "osier", "osmium", "ostrich", "otterpup",
    "ottoman", "outlet", "oven", "owlet", "oxbow", "oxygen", "oyster", "packet",
    "pad", "paddlefish", "paddlewheel", "paella", "painted", "palette", "paling", "pallas",
    "palm", "paludarium", "pampa", "pancake", "panda", "pannier", "panpipe", "panther",
    "pantry", "paper", "papyrus", "parable", "parakeet", "paramount", "parcel", "parchment",
    "parmesan", "parrot", "parsley", "parsnip", "partridge", "pass", "passionfruit", "pasta",
    "pastryboard", "pasture", "patio", "patisserie", "paver", "pawpaw", "peach", "peachhue",
    "peahen", "peak", "peanut", "pear", "peasouper", "pecan", "peccary", "peeler",
    "peerless", "pegasus", "pelican", "pelmet", "pen", "penguin", "peninsula", "pennant",
    "penne", "peppermill", "peppermint", "percale", "perch", "pergola", "peridot", "periscope",
    "periwinkle", "perseus", "persimmon", "pesto", "petite", "pewee", "pewter", "pheasant",
    "phoebe", "phoenix", "phrase", "piano", "pickerel", "picket", "pickup", "pie",
    "pig", "pigeon", "pigment", "pika", "pilaf", "pilaster", "pile", "pillar",
    "pillowcase", "pin", "pine", "pineapple", "pink", "pintail", "pipefish", "pipit",
    "piston", "pita", "pitcher", "pitter", "pivot", "placid", "plaice", "plait",
    "plane", "planet", "planetarium", "plank", "plantain", "plateau", "platinum", "platy",
    "platypus", "playful", "pleach", "pliers", "plover", "plucky", "plug", "plugcap",
    "plum", "plume", "plumhue", "plungepool", "pluto", "plywood", "point", "pointer",
    "polarfront", "pole", "polka", "pollard", "pollock", "pomace", "pomelo", "pompano",
    "pontoon", "pony", "poppy", "porch", "porgy", "porpoise", "porringer", "portcullis",
    "portico", "portmanteau", "postcard", "potager", "potato", "potholder", "prairie", "prawn",
    "prelude", "press", "presscake", "pretzel", "prime", "prism", "probe", "prompt",
    "provender", "prune", "ptarmigan", "puffin", "pulley", "puma", "pumice", "pun",
    "punch", "punt", "punting", "puppy", "purple", "pyrite", "quagmire", "quaint",
    "quartz", "quasar", "quench", "quick", "quill", "quilt", "quinoa", "quire",
    "quokka", "rabbit", "radicchio", "radish", "radon", "raft", "rail", "rain",
    "raisin", "ram", "rambutan", "ramekin", "rampart", "range", "rapid", "rapids",
    "rasbora", "rasp", "rat", "ratchet", "rattle", "ravine", "ravioli", "ream",
    "reamer", "recorder", "red", "redwood", "reed", "reel", "refinery", "reindeer",
    "relish", "resin", "reveille", "rhea", "rhino", "rhythm", "ribbon", "rice",
    "ricer", "ricotta", "riddle", "ridge", "ridgefield", "rigging", "rill", "rimeice",
    "ripsaw", "risotto", "rivet", "rivulet", "roadrunner", "roadster", "roaster", "robin",
    "rockery", "rocket", "roller", "rollingpin", "roomy", "rooster", "ropewalk", "rose",
    "rosette", "rosewood", "rotate", "router", "rover", "roving", "rowlock", "ruby",
    "rudd", "ruffle", "rug", "ruler", "rumba", "runner", "runnerbean", "russet",
    "rutabaga", "sack", "saddle", "safflower", "saffron", "saga", "sage", "sail",
    "sailfish", "salmon", "salmonpink", "salt", "saltcellar", "salute", "salver", "samba",
    "samovar", "sandalwood", "sanddollar", "sandpiper", "sapphire", "sapsucker", "sardine", "satchel",
    "satellite", "satin", "saturn", "saucepan", "sauger", "saunter", "savory", "saw",
    "sawhorse", "sawmill", "scabbard", "scaffold", "scallion", "scallop", "scant", "scantling",
    "scarlet", "schist", "schooner", "scissors", "scone", "scoop", "scoria", "scorpius",
    "scoter", "scraper", "scree", "screwdriver", "scriber", "scroll", "scudcloud", "sculpin",
    "scurry", "sea", "seabreeze", "seal", "sealion", "seam", "seamount", "season",
    "second", "seedbed", "seeder", "seine", "seiner", "semitone", "semitrailer", "sentence",
    "sepia", "sequoia", "serenade", "serene", "serpentine", "serval", "sesame", "setter",
    "sextant", "shackle", "shaggy", "shake", "shale", "shallot", "shanty", "shaper",
    "sharp", "sheaf", "shears", "shearwater", "sheep", "sheet", "shelfcloud", "shellac",
    "shield", "shiner", "shiny", "shipyard", "shoot", "shorts", "shrew", "shrike",
    "shrimp", "shrubbery", "shutter", "sidecar", "sienna", "sift", "sifter", "silage",
    "silent", "silk", "silky", "silo", "silver", "sinker", "siren", "sisal",
    "sitar", "skein", "skewer", "skibob", "skidsteer", "skillet", "skipper", "skitter",
    "slack", "slate", "sled", "sledge", "sleeper", "sleet", "slender", "slide",
    "slim", "slip", "sloth", "slug", "slush", "small", "smithy", "smock",
    "smooth", "smoothie", "snapper", "snappy", "snifter", "snipe", "snook", "snow",
    "snowdrop", "snowmelt", "snowpack", "snug", "soapstone", "soaring", "socket", "soft",
    "solder", "solid", "solstice", "sonnet", "sorbet", "sound", "soup", "soursop",
    "sousaphone", "soybean", "spacious", "spanner", "spar", "spark", "sparrow", "spatula",
    "spearmint", "speedy", "spelt", "spider", "spin", "spinach", "spinel", "spinnaker",
    "spinney", "spire", "splendid", "splint", "sponge", "spool", "spoonbait", "spoonbill",
    "spray", "sprayer", "spright", "spring", "spruce", "spry", "spur", "squall",
    "square", "squash", "squid", "squirrel", "staccato", "stack", "staircase", "stallion",
    "stalwart", "standard", "stanza", "stapler", "star", "starling", "station", "stay",
    "steady", "steamer", "steamroller", "steep", "steeple", "steppe", "stepstool", "stern",
    "stew", "still", "stir", "stoat", "stockpot", "stoop", "stopper", "storm",
    "stout", "stove", "strait", "strange", "stratus", "strawbale", "stream", "streamer",
    "string", "stroll", "strop", "strudel", "stud", "studio", "sturdy", "sturgeon",
    "subway", "sucker", "sugary", "sulfur", "summit", "sun", "sundae", "sunday",
    "sunfish", "sunflower", "sunrise", "sunstone", "superb", "supple", "supreme", "surrey",
    "swag", "swallow", "swallowtail", "swan", "swath", "sweet", "swell", "swift",
    "swirl", "swivel", "swoop", "swordtail", "sycamore", "symphony", "syrup", "tabla",
    "tablecloth", "tablespoon", "tachometer", "tackle", "taffeta", "taiga", "talc", "tall",
    "tamarack", "tamarin", "tambourine", "tan", "tandem", "tangerine", "tango", "tangy",
    "tankcar", "tanker", "tansy", "tap", "tapenade", "taper", "tapir", "taps",
    "tarantula", "tarn", "tarpon", "tarragon", "tart", "tattoo", "taurus", "tea",
    "teak", "teapot", "teaspoon", "temperate", "tempo", "tender", "termite", "terrace",
    "terrarium", "tethys", "tetra", "thermal", "thermometer", "thicket", "thimble", "threader",
    "thresh", "threshold", "throttle", "thunder", "thunderhead", "thwart", "thyme", "tide",
    "tidy", "tiger", "tilapia", "timber", "timpani", "tin", "tinder", "tiny",
    "titan", "titanium", "toasty", "toboggan", "today", "toffee", "toile", "toll",
    "tomato", "tome", "tone", "tong", "toolbox", "topaz", "torchlight", "tornado",
    "tortilla", "tote", "tough", "tourmaline", "towel", "towering", "tractor", "train",
    "tram", "transom", "travertine", "trawler", "treadle", "trench", "trencher", "tricycle",
    "trident", "trimaran", "triplane", "triton", "trivet", "trombone", "tropic", "troughline",
    "trout", "truck", "truffle", "trunk", "truss", "tuck", "tuesday", "tuff",
    "tulip", "tulle", "tumbler", "tumulus", "tundra", "tungsten", "turbine", "turboprop",
    "tureen", "turkey", "turnip", "turpentine", "turquoisegem", "turret", "twig", "twilight",
    "twine", "twirl", "typhoon", "ukulele", "umber", "umiak", "underwood", "unicycle",
    "upper", "upslope", "uranus", "ursa", "utmost", "vale", "valiant", "valley",
    "valleywind", "vane", "vanguard", "varnish", "vast", "veer", "vela", "vellum",
    "velvet", "velvety", "veneer", "veranda", "verglas", "verse", "vesta", "vetch",
    "vibraphone", "vicuna", "villa", "viola", "violet", "violin", "virga", "virgo",
    "vise", "vivace", "voile", "volcano", "volley", "voltmeter", "vortex", "vowel",
    "waffle", "waft", "wagon", "wagtail", "walkingstick", "wall", "wallcloud", "wallet",
    "walnut", "walrus", "wand", "wander", "warm", "warmfront", "wary", "wasabi",
    "washer", "watercress", "waterfall", "watermill", "waterspout", "weasel", "weatherboard", "weave",
    "weavery", "wednesday", "wee", "weevil", "weft", "welder", "well", "westerlies",
    "western", "whale", "whaler", "wheat", "wheel", "whelk", "whetstone", "whirl",
    "whirlpool", "whisk", "white", "whitefish", "whiting", "whole", "wicker", "wicket",
    "wigeon", "wildflower", "willow", "winch", "windlass", "windmill", "windslab", "windsock",
    "winery", "winkle", "winter", "wintry", "withy", "witty", "wolf", "wolverine",
    "wondrous", "woodblock", "woodland", "woodpecker", "wool", "word", "workbench", "worm",
    "worsted", "wrap", "wrasse", "wren", "wrench", "xenon", "xylophone", "yam",
    "yardstick", "yarrow", "yawl", "yellow", "yew", "young", "zebra", "zenith",
    "zephyr", "zester", "zesty", "zinc", "zinnia", "zircon", "zither", "zucchini",
];
