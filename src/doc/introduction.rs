/*!
# Introductory Tutorial for Pocket BASIC

Run the executable in a terminal. The screen is a small display with
an edit line at the bottom. The inverted letter on the edit line is the
cursor.

<pre><code>&nbsp;  <b>K</b>
</code></pre>

A `K` cursor means the next thing typed should be a keyword. Anywhere
else the cursor is an `L`. Every key you press is checked straight
away. If what you have typed so far can't be right, an inverted `S`
marks the place and ENTER is refused.

<pre><code>&nbsp;  PRINT 1+<b>S</b>)<b>L</b>
</code></pre>

Type a statement and press ENTER to run it at once. Every command ends
with a report: a code and a line number. `0` means all went well.

<pre><code>&nbsp;> PRINT "HELLO WORLD"
&nbsp;  HELLO WORLD
&nbsp;  0/0
</code></pre>

Put a line number from 1 to 9999 in front of a statement to store it
in the program instead. Typing just the number deletes the line. UP
and DOWN bring stored lines back to the edit line for changes.

<pre><code>&nbsp;> 10 FOR I=1 TO 3
&nbsp;> 20 PRINT I*I
&nbsp;> 30 NEXT I
&nbsp;> RUN
&nbsp;  1
&nbsp;  4
&nbsp;  9
&nbsp;  0/30
</code></pre>

An error stops the program and the report gives the code and the line.
Escape or CTRL-C is the break key; it stops a running program with
code `9`. `CONT` carries on from there.

<pre><code>&nbsp;> 10 PRINT 1/0
&nbsp;> RUN
&nbsp;  6/10
</code></pre>

Programs are saved into numbered slots with `SAVE` and brought back
with `LOAD`. Slot 0 holds a small demonstration program.

*/
