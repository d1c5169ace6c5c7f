use html::{component, html};

#[component]
pub fn Document(title: String) {
	html! {
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				<meta content="width=device-width, initial-scale=1" name="viewport" />
				<title>{title}</title>
				<link href="/styles.css" rel="stylesheet" />
				<meta content="Store administration dashboard" name="description" />
			</head>
			<body>
				{children}
			</body>
		</html>
	}
}
