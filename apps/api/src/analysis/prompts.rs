// Instruction prompts, one per analysis action.
// Each is sent after the job description and the resume page image.

pub const RESUME_ANALYSIS_PROMPT: &str = r#"You are an experienced HR manager and resume analyst. Analyze the provided resume and job description in detail. In your response, include:
- A summary of how well the resume aligns with the job requirements.
- The candidate's key strengths relevant to the job.
- Any significant gaps or mismatches.
- Whether the resume would be compelling to a recruiter for this specific role.
Please provide your assessment in clear, actionable bullet points."#;

pub const HIGHLIGHT_SKILLS_PROMPT: &str = r#"Review the provided resume and extract all key skills, certifications, tools, and technologies. Organize them into categories such as:
- Technical Skills (e.g., programming languages, frameworks)
- Soft Skills (e.g., communication, teamwork)
- Certifications
- Tools & Platforms
Present your findings in a structured list or table."#;

pub const IMPROVE_SKILLS_PROMPT: &str = r#"Compare the skills in the resume with those required in the job description. For each missing or underdeveloped skill, suggest practical ways to improve (e.g., recommended courses, certifications, or projects). Also, highlight which existing skills should be further developed. Prioritize the most critical skill gaps for the job."#;

pub const SKILLS_MATCH_PROMPT: &str = r#"Compare the required skills from the job description with those in the resume. For each skill, indicate if it is a perfect match, partial match, or missing. Calculate the percentage of required skills present in the resume and explain your calculation. Present your findings in a table and provide a final skill alignment percentage."#;

pub const WEAKNESSES_PROMPT: &str = r#"Identify and list the main weaknesses or areas for improvement in the resume, considering the job description. For each weakness (e.g., missing skills, lack of achievements, formatting issues), explain its impact on job prospects and provide specific, actionable suggestions to address it. Prioritize the most critical weaknesses."#;

/// Ends before the original's `[Insert ...]` placeholders: the job
/// description and resume arrive as separate parts of the same request.
pub const ATS_SCORE_PROMPT: &str = r#"You are an expert ATS system trained to evaluate resumes for job matching and parsing accuracy.

I will provide you with:
1. A job description
2. A candidate's resume

Your task is to perform a full ATS-focused analysis.

Step-by-step, do the following:

1. ATS Score (Out of 100)
Break down the score into:
- Keyword Match (30 points): Match of skills, tools, and job-specific terms
- Formatting (15 points): Is the resume clean, parseable (no tables, images, fancy columns)?
- Relevance (25 points): How well do the candidate's experience, education, and achievements fit the role?
- Skills Coverage (20 points): Are required hard and soft skills from the JD mentioned?
- Section Structure (10 points): Are standard headers like Education, Experience, Skills used?

Then provide a final score out of 100 with a one-line summary.

2. Parsing Issues
List any formatting or structural issues that could prevent proper parsing by an ATS (e.g., images, tables, non-standard fonts, missing section headers, PDF problems, etc.)

3. Suggestions to Improve ATS Optimization
Provide 3–5 realistic suggestions to improve the resume's chances of getting past ATS screening, especially for this job.

Be strict but fair. Do not inflate the score — a good resume should score around 70–80. Only exceptional ones should score 90+.

At the end, provide a summary table of your scoring breakdown."#;

pub const COVER_LETTER_PROMPT: &str = r#"Write a professional and concise cover letter tailored to the provided resume and job description. The letter should include:
- A brief introduction
- A body highlighting the candidate's most relevant skills and experiences
- A closing statement expressing interest in the role
Limit the letter to 3–4 paragraphs."#;

pub const RESUME_QUESTIONS_PROMPT: &str = r#"You are a highly experienced HR specialist and resume strategist. Based on my resume (and job description, if provided), generate 5–7 thought-provoking, improvement-focused questions that will help me strengthen my resume and better align it with the target role. Focus on areas such as skill gaps, achievements, clarity, and relevance to the job."#;
