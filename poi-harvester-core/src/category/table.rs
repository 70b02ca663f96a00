//! Built-in category table.
//!
//! Each entry maps a hyphenated category identifier onto the OpenStreetMap
//! tag pairs that select it. Entries are grouped by the key of their first
//! tag, which drives [`super::ThemeGroup`] classification.

pub(super) type TableEntry = (&'static str, &'static [(&'static str, &'static str)]);

pub(super) const BUILTIN_CATEGORIES: &[TableEntry] = &[
    // Amenities
    ("drinking-water", &[("amenity", "drinking_water")]),
    ("hospital", &[("amenity", "hospital")]),
    ("school", &[("amenity", "school")]),
    ("library", &[("amenity", "library")]),
    ("pharmacy", &[("amenity", "pharmacy")]),
    ("restaurant", &[("amenity", "restaurant")]),
    ("cafe", &[("amenity", "cafe")]),
    ("toilets", &[("amenity", "toilets")]),
    ("bench", &[("amenity", "bench")]),
    ("graveyard", &[("amenity", "grave_yard")]),
    ("bank", &[("amenity", "bank")]),
    ("atm", &[("amenity", "atm")]),
    ("post-office", &[("amenity", "post_office")]),
    ("fuel", &[("amenity", "fuel")]),
    ("parking", &[("amenity", "parking")]),
    ("police", &[("amenity", "police")]),
    ("fire-station", &[("amenity", "fire_station")]),
    ("town-hall", &[("amenity", "townhall")]),
    ("university", &[("amenity", "university")]),
    ("college", &[("amenity", "college")]),
    ("kindergarten", &[("amenity", "kindergarten")]),
    ("clinic", &[("amenity", "clinic")]),
    ("dentist", &[("amenity", "dentist")]),
    ("veterinary", &[("amenity", "veterinary")]),
    ("place-of-worship", &[("amenity", "place_of_worship")]),
    // Leisure
    ("fitness-centre", &[("leisure", "fitness_centre")]),
    ("park", &[("leisure", "park")]),
    ("playground", &[("leisure", "playground")]),
    ("swimming-pool", &[("leisure", "swimming_pool")]),
    ("dog-park", &[("leisure", "dog_park")]),
    ("stadium", &[("leisure", "stadium")]),
    ("sports-centre", &[("leisure", "sports_centre")]),
    ("golf-course", &[("leisure", "golf_course")]),
    ("marina", &[("leisure", "marina")]),
    ("garden", &[("leisure", "garden")]),
    ("nature-reserve", &[("leisure", "nature_reserve")]),
    ("beach", &[("leisure", "beach_resort")]),
    ("picnic-table", &[("leisure", "picnic_table")]),
    // Shops
    ("supermarket", &[("shop", "supermarket")]),
    ("bakery", &[("shop", "bakery")]),
    ("hairdresser", &[("shop", "hairdresser")]),
    ("clothes", &[("shop", "clothes")]),
    ("electronics", &[("shop", "electronics")]),
    ("books", &[("shop", "books")]),
    ("convenience", &[("shop", "convenience")]),
    ("butcher", &[("shop", "butcher")]),
    ("greengrocer", &[("shop", "greengrocer")]),
    ("florist", &[("shop", "florist")]),
    ("hardware", &[("shop", "hardware")]),
    ("bicycle", &[("shop", "bicycle")]),
    ("car", &[("shop", "car")]),
    ("car-repair", &[("shop", "car_repair")]),
    ("optician", &[("shop", "optician")]),
    ("jewelry", &[("shop", "jewelry")]),
    ("gift", &[("shop", "gift")]),
    ("toys", &[("shop", "toys")]),
    ("sports", &[("shop", "sports")]),
    ("shoes", &[("shop", "shoes")]),
    ("furniture", &[("shop", "furniture")]),
    ("department-store", &[("shop", "department_store")]),
    ("mall", &[("shop", "mall")]),
    // Tourism
    ("attraction", &[("tourism", "attraction")]),
    ("hotel", &[("tourism", "hotel")]),
    ("hostel", &[("tourism", "hostel")]),
    ("guest-house", &[("tourism", "guest_house")]),
    ("museum", &[("tourism", "museum")]),
    ("gallery", &[("tourism", "gallery")]),
    ("viewpoint", &[("tourism", "viewpoint")]),
    ("information", &[("tourism", "information")]),
    ("artwork", &[("tourism", "artwork")]),
    ("zoo", &[("tourism", "zoo")]),
    ("theme-park", &[("tourism", "theme_park")]),
    // Transport
    ("bus-stop", &[("highway", "bus_stop")]),
    ("railway-station", &[("railway", "station")]),
    ("subway-entrance", &[("railway", "subway_entrance")]),
    ("taxi", &[("amenity", "taxi")]),
    ("bicycle-rental", &[("amenity", "bicycle_rental")]),
    ("car-rental", &[("amenity", "car_rental")]),
    ("ferry-terminal", &[("amenity", "ferry_terminal")]),
];
