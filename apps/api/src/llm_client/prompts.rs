// System prompt for turning extracted CV / LinkedIn PDF text into a
// fixed-layout profile description. The output is free text; nothing parses it.
// The document text itself travels as the user message.

pub const PROFILE_FORMAT_SYSTEM: &str = "\
Analyze the following text and extract a detailed profile in a strict, standardized format. \
The format should be exactly as follows:

'Name: [Name]
Public Identifier: [Last part of the LinkedIn URL]
LinkedIn Profile URL: [LinkedIn Profile URL]
Languages: [Languages]

Roles:
1. Employer: [Employer]
   Role: [Role]
   Tenure: [Tenure]
   Location: [Location]
(and so on for all roles, grouped by employer if there is more than one role per employer)

Education:
1. Institution: [Institution]
   Course: [Course]
   Tenure: [Tenure]
(and so on for all educational details)'

If any details, especially 'Location:', are missing for any entry, indicate it as 'Location: Not specified'.

End of Text.";
