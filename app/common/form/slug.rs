/// Turns a name into a URL-safe slug: lowercase ASCII letters and digits, every run of other characters becomes a single `-`, no leading or trailing `-`. Common Latin letters with diacritics are folded to their ASCII base.
pub fn slugify(name: &str) -> String {
	let mut slug = String::with_capacity(name.len());
	let mut pending_separator = false;
	for c in name.chars().flat_map(char::to_lowercase) {
		let mut ascii = [0; 4];
		let folded = if c.is_ascii_alphanumeric() {
			&*c.encode_utf8(&mut ascii)
		} else {
			match fold_latin(c) {
				Some(folded) => folded,
				None => {
					pending_separator = true;
					continue;
				}
			}
		};
		if pending_separator && !slug.is_empty() {
			slug.push('-');
		}
		pending_separator = false;
		slug.push_str(folded);
	}
	slug
}

fn fold_latin(c: char) -> Option<&'static str> {
	let folded = match c {
		'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ą' => "a",
		'æ' => "ae",
		'ç' | 'ć' | 'č' => "c",
		'ď' | 'đ' => "d",
		'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => "e",
		'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
		'ł' => "l",
		'ñ' | 'ń' | 'ň' => "n",
		'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
		'œ' => "oe",
		'ř' => "r",
		'ß' => "ss",
		'ś' | 'š' => "s",
		'ť' => "t",
		'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
		'ý' | 'ÿ' => "y",
		'ź' | 'ż' | 'ž' => "z",
		_ => return None,
	};
	Some(folded)
}

/// The slug to submit: the one entered, or one made from the name when none was. A slug of only whitespace counts as none.
pub fn slug_or_default(slug: &str, name: &str) -> String {
	let slug = slug.trim();
	if slug.is_empty() {
		slugify(name)
	} else {
		slug.to_owned()
	}
}

#[test]
fn test_slugify() {
	assert_eq!(slugify("Red T-Shirt"), "red-t-shirt");
	assert_eq!(slugify("  Size (EU)  "), "size-eu");
	assert_eq!(slugify("Größe"), "grosse");
	assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
	assert_eq!(slugify("茶 Tea"), "tea");
	assert_eq!(slugify("--"), "");
}

#[test]
fn test_slug_or_default() {
	assert_eq!(slug_or_default("", "Red T-Shirt"), "red-t-shirt");
	assert_eq!(slug_or_default("   ", "Red T-Shirt"), "red-t-shirt");
	assert_eq!(slug_or_default(" custom-slug ", "Red T-Shirt"), "custom-slug");
	assert_eq!(slug_or_default("custom-slug", ""), "custom-slug");
}
