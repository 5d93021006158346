use assoc_map::AssocMap;

fn main() {
    let mut map: AssocMap<String, i32> = AssocMap::new();

    map.insert("Apple".to_string(), 3);
    map.insert("Banana".to_string(), 5);

    match map.get("Apple") {
        Some(count) => println!("Apples: {count}"),
        None => println!("Apples: none"),
    }

    println!("Has Apple? {}", map.contains_key("Apple"));
    println!("Has 10? {}", map.contains_value(&10));

    map.insert("Apple".to_string(), 10);
    if let Some(count) = map.get("Apple") {
        println!("Updated Apples: {count}");
    }

    map.remove("Banana");

    println!("Size of map: {}", map.len());

    for (fruit, count) in &map {
        println!("{fruit}: {count}");
    }

    map.clear();
    println!("Is map empty? {}", map.is_empty());
}
